//! Browser and platform classification from a `User-Agent` header.

use woothee::parser::Parser;

/// Value woothee reports for fields it cannot classify.
const UNKNOWN: &str = "UNKNOWN";

/// Browser and platform names extracted from a user agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub browser: Option<String>,
    pub platform: Option<String>,
}

/// Classifies a user agent string. Unknown agents yield empty fields.
pub fn parse_user_agent(user_agent: Option<&str>) -> ClientInfo {
    let Some(parsed) = user_agent.and_then(|ua| Parser::new().parse(ua)) else {
        return ClientInfo::default();
    };

    ClientInfo {
        browser: known(parsed.name),
        platform: known(parsed.os),
    }
}

fn known(value: &str) -> Option<String> {
    (!value.is_empty() && value != UNKNOWN).then(|| value.to_string())
}
