#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub length: Option<i64>,
    pub password_type: Option<String>,
    pub count: Option<i64>,
    pub chars: Option<String>,
}
