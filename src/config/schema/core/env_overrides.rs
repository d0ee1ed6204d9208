use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port_str) =
            std::env::var("VIRTUM_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.trim().parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("VIRTUM_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(raw) = std::env::var("VIRTUM_MAX_RECENT_RESPONSES")
            && let Ok(max) = raw.trim().parse::<usize>()
        {
            self.chat.max_recent_responses = max;
        }

        if let Ok(level) = std::env::var("VIRTUM_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }
    }
}
