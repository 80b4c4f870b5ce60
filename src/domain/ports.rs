use crate::utils::logger::LogFormat;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn log_format(&self) -> LogFormat;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
