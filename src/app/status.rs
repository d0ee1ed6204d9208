use virtum::Config;

pub fn render_status(config: &Config) -> String {
    let gateway = &config.gateway;
    let chat = &config.chat;
    let baseline = &config.metrics.baseline;
    let jitter = &config.metrics.jitter;

    let mut lines = vec![
        "◆ Virtum status".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Config      {}", config.config_path.display()),
        String::new(),
        "Gateway".to_string(),
        format!("  Address      {}:{}", gateway.host, gateway.port),
        format!(
            "  Public bind  {}",
            if gateway.allow_public_bind {
                "allowed"
            } else {
                "refused"
            }
        ),
    ];

    lines.push(if gateway.cors_origins.is_empty() {
        "  CORS         any origin".to_string()
    } else {
        format!("  CORS         {}", gateway.cors_origins.join(", "))
    });

    lines.extend([
        String::new(),
        "Chat".to_string(),
        format!("  History      {} replies", chat.max_recent_responses),
        format!("  Similarity   {:.2}", chat.similarity_threshold),
        String::new(),
        "Metrics baseline".to_string(),
        format!(
            "  Heart rate   {} bpm (±{})",
            baseline.heart_rate,
            jitter.heart_rate_width / 2.0
        ),
        format!("  Blood press. {} mmHg", baseline.blood_pressure),
        format!(
            "  Steps        {} (±{})",
            baseline.steps,
            jitter.steps_width / 2.0
        ),
        format!(
            "  Water        {:.1}L (+ up to {})",
            baseline.water_intake_liters, jitter.water_max_added
        ),
        format!("  Oxygen       {}%", baseline.oxygen),
        format!("  Temperature  {:.1}°C", baseline.temperature),
        String::new(),
        format!("Log level   {}", config.observability.log_level),
    ]);

    lines.join("\n")
}
