use clap::{Parser, ValueEnum};
use roster_service::DepartmentPolicy;
use roster_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "ROSTER_GATEWAY_LISTEN_ADDR";
pub const ID_SCHEME_ENV: &str = "ROSTER_ID_SCHEME";
pub const ID_PREFIX_ENV: &str = "ROSTER_ID_PREFIX";
pub const DEPARTMENT_POLICY_ENV: &str = "ROSTER_DEPARTMENT_POLICY";
pub const LOG_FORMAT_ENV: &str = "ROSTER_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_ID_PREFIX: &str = "emp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdSchemeArg {
    #[value(name = "uuid")]
    Uuid,
    #[value(name = "sequential")]
    Sequential,
}

impl Display for IdSchemeArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdSchemeArg::Uuid => write!(f, "uuid"),
            IdSchemeArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepartmentPolicyArg {
    #[value(name = "free-text")]
    FreeText,
    #[value(name = "catalog")]
    Catalog,
}

impl Display for DepartmentPolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DepartmentPolicyArg::FreeText => write!(f, "free-text"),
            DepartmentPolicyArg::Catalog => write!(f, "catalog"),
        }
    }
}

impl From<DepartmentPolicyArg> for DepartmentPolicy {
    fn from(value: DepartmentPolicyArg) -> Self {
        match value {
            DepartmentPolicyArg::FreeText => DepartmentPolicy::FreeText,
            DepartmentPolicyArg::Catalog => DepartmentPolicy::Catalog,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "roster-gateway", version)]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = ID_SCHEME_ENV,
        value_enum,
        default_value_t = IdSchemeArg::Uuid
    )]
    pub id_scheme: IdSchemeArg,

    /// Prefix of sequential ids; ignored by the uuid scheme.
    #[arg(long, env = ID_PREFIX_ENV, default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,

    #[arg(
        long,
        env = DEPARTMENT_POLICY_ENV,
        value_enum,
        default_value_t = DepartmentPolicyArg::FreeText
    )]
    pub department_policy: DepartmentPolicyArg,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
