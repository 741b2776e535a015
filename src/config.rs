use std::env;

/// Text and defaults for the single form page. Fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    pub page_title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub start_label: &'static str,
    pub end_label: &'static str,
    pub default_starts: &'static str,
    pub default_ends: &'static str,
    pub submit_label: &'static str,
    pub chart_title: &'static str,
    pub axis_label: &'static str,
}

pub const PAGE: PageConfig = PageConfig {
    page_title: "Activity Selection (Greedy)",
    heading: "Activity Selection using Greedy Algorithm",
    description: "This app finds the <strong>maximum number of non-overlapping activities</strong> \
                  using a greedy approach and visualizes them on a timeline.",
    start_label: "Start Times (comma-separated)",
    end_label: "End Times (comma-separated)",
    default_starts: "1,3,0,5,8,5",
    default_ends: "2,4,6,7,9,9",
    submit_label: "Run Algorithm & Show Graph",
    chart_title: "Activity Selection Timeline",
    axis_label: "Time",
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Where the web server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// A port given on the command line wins over the `PORT` variable;
    /// `HOST` only comes from the environment.
    pub fn from_env(arg_port: Option<u16>) -> Self {
        let env_port = env::var("PORT").ok();
        let env_host = env::var("HOST").ok();
        Self::resolve(arg_port, env_port.as_deref(), env_host.as_deref())
    }

    fn resolve(arg_port: Option<u16>, env_port: Option<&str>, env_host: Option<&str>) -> Self {
        let port = arg_port
            .or_else(|| env_port.and_then(|p| p.parse::<u16>().ok()))
            .unwrap_or(DEFAULT_PORT);
        let host = env_host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(DEFAULT_HOST)
            .to_string();
        Self { host, port }
    }
}
