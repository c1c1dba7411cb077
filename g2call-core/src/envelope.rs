//! Login envelope construction and token extraction
//!
//! The login endpoint speaks a fixed XML envelope dialect. The account
//! password travels in clear text inside the content block; that is the
//! vendor wire format and is preserved exactly for interoperability.

use g2call_types::Credentials;

use crate::constants::{client, ENVELOPE_FLAG, ENVELOPE_VERSION};

/// Build the login envelope for one account
///
/// # Examples
///
/// ```
/// use g2call_types::Credentials;
/// use g2call_core::envelope;
///
/// let creds = Credentials::new("user", "pass").unwrap();
/// let body = envelope::login_envelope(&creds);
/// assert!(body.contains("<command>login</command>"));
/// assert!(body.contains("<account>user</account>"));
/// ```
pub fn login_envelope(credentials: &Credentials) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<envelope>
    <header>
        <flag>{flag}</flag>
        <version>{version}</version>
        <command>login</command>
        <seq>1</seq>
        <session></session>
        <user-data></user-data>
        <client>
            <id>{client_id}</id>
            <type>{client_type}</type>
            <oem>{oem}</oem>
            <app>{app}</app>
        </client>
    </header>
    <content>
        <account>{account}</account>
        <password>{password}</password>
        <auth-type>0</auth-type>
        <auth-code></auth-code>
        <ip-region-id>0</ip-region-id>
    </content>
</envelope>
"#,
        flag = ENVELOPE_FLAG,
        version = ENVELOPE_VERSION,
        client_id = client::ID,
        client_type = client::TYPE,
        oem = client::OEM,
        app = client::APP,
        account = credentials.username(),
        password = credentials.password(),
    )
}

/// Extract the bearer token element from a login response envelope
///
/// The backend puts a single `<token>` element somewhere inside the
/// response envelope. Returns `None` when the element is absent or empty;
/// the caller treats that as a non-fatal login without token.
pub fn extract_token(xml: &str) -> Option<String> {
    let start = xml.find("<token>")? + "<token>".len();
    let end = start + xml[start..].find("</token>")?;

    let token = xml[start..end].trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn creds() -> Credentials {
        Credentials::new("alice@example.com", "s3cret").unwrap()
    }

    #[test]
    fn test_envelope_carries_credentials() {
        let body = login_envelope(&creds());
        assert!(body.contains("<account>alice@example.com</account>"));
        assert!(body.contains("<password>s3cret</password>"));
    }

    #[test]
    fn test_envelope_fixed_header() {
        let body = login_envelope(&creds());
        assert!(body.contains("<flag>tdkcloud</flag>"));
        assert!(body.contains("<version>1.10</version>"));
        assert!(body.contains("<command>login</command>"));
        assert!(body.contains("<type>2</type>"));
        assert!(body.contains("<auth-type>0</auth-type>"));
        assert!(body.contains("<ip-region-id>0</ip-region-id>"));
    }

    #[test]
    fn test_extract_token_present() {
        let xml = "<envelope><content><token>abc123</token></content></envelope>";
        assert_eq!(extract_token(xml), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_token_whitespace() {
        let xml = "<envelope><token>\n  tok \n</token></envelope>";
        assert_eq!(extract_token(xml), Some("tok".to_string()));
    }

    #[test]
    fn test_extract_token_absent() {
        let xml = "<envelope><content><status>ok</status></content></envelope>";
        assert_eq!(extract_token(xml), None);
    }

    #[test]
    fn test_extract_token_empty_element() {
        let xml = "<envelope><token></token></envelope>";
        assert_eq!(extract_token(xml), None);
    }

    #[test]
    fn test_extract_token_unclosed() {
        let xml = "<envelope><token>abc";
        assert_eq!(extract_token(xml), None);
    }
}
