//! Per-topic reply renderers.
//!
//! Each renderer turns one snapshot into a finished reply. Thresholds are
//! the usual consumer-wellness ones (10k steps, 2.5 L water, 60-100 bpm
//! resting heart rate) and are deliberately not configurable.

use crate::core::entropy::Entropy;
use crate::core::metrics::{BloodPressure, MetricsSnapshot};
use crate::error::ChatError;
use crate::utils::text::{group_thousands, percent_of};

pub(super) const STEP_GOAL: u32 = 10_000;
pub(super) const WATER_GOAL_LITERS: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PressureTier {
    #[strum(to_string = "🟢 Optimal")]
    Optimal,
    #[strum(to_string = "🟢 Normal")]
    Normal,
    #[strum(to_string = "🟡 Elevated")]
    Elevated,
    #[strum(to_string = "🔴 High")]
    High,
}

impl PressureTier {
    pub fn of(bp: BloodPressure) -> Self {
        let BloodPressure {
            systolic,
            diastolic,
        } = bp;
        if systolic < 120 && diastolic < 80 {
            Self::Optimal
        } else if systolic < 130 && diastolic < 85 {
            Self::Normal
        } else if systolic < 140 && diastolic < 90 {
            Self::Elevated
        } else {
            Self::High
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Self::Optimal => "Perfect! Continue your healthy lifestyle habits.",
            Self::Normal => "Good reading. Keep monitoring and maintain a balanced diet.",
            Self::Elevated | Self::High => {
                "Consider reducing sodium intake, increasing exercise, and consulting a healthcare provider if readings stay elevated."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HeartTier {
    #[strum(to_string = "low (bradycardia)")]
    Low,
    #[strum(to_string = "perfectly normal")]
    Normal,
    #[strum(to_string = "elevated (tachycardia)")]
    Elevated,
}

impl HeartTier {
    pub fn of(bpm: u32) -> Self {
        if bpm < 60 {
            Self::Low
        } else if bpm > 100 {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    /// One-word label used in the summary replies.
    fn short(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "healthy",
            Self::Elevated => "elevated",
        }
    }

    fn context(self) -> &'static str {
        match self {
            Self::Low => {
                "This can be normal for well-trained athletes. However, if you feel dizzy, fatigued, or have chest pain, consult a doctor."
            }
            Self::Elevated => {
                "This could be due to stress, caffeine, recent physical activity, or anxiety. If it persists while resting, consider seeing a healthcare provider."
            }
            Self::Normal => {
                "This indicates good cardiovascular health. Your heart is pumping efficiently."
            }
        }
    }
}

fn heart_ok(bpm: u32) -> bool {
    HeartTier::of(bpm) == HeartTier::Normal
}

fn steps_percent(m: &MetricsSnapshot) -> i64 {
    percent_of(f64::from(m.steps), f64::from(STEP_GOAL))
}

fn water_percent(m: &MetricsSnapshot) -> i64 {
    percent_of(m.water_intake_liters, WATER_GOAL_LITERS)
}

pub(super) fn greeting(m: &MetricsSnapshot, entropy: &dyn Entropy) -> Result<String, ChatError> {
    let steps = group_thousands(m.steps);
    let options = [
        format!(
            "Hello! Your current stats: {steps} steps and {} bpm. What would you like to know?",
            m.heart_rate
        ),
        format!(
            "Hi there! I can see you've got {} bpm heart rate and {:.1}L water intake. How can I help?",
            m.heart_rate, m.water_intake_liters
        ),
        format!("Hey! You've taken {steps} steps today. Want insights on any metric?"),
    ];
    let pick = entropy.index(options.len());
    Ok(options[pick].clone())
}

pub(super) fn blood_pressure(
    m: &MetricsSnapshot,
    _entropy: &dyn Entropy,
) -> Result<String, ChatError> {
    let tier = PressureTier::of(m.blood_pressure()?);
    Ok(format!(
        "🩺 Blood Pressure Analysis:\n\n\
         Current Reading: {} mmHg\n\
         Status: {tier}\n\n\
         📊 Reference Ranges:\n\
         • Optimal: <120/80 mmHg\n\
         • Normal: <130/85 mmHg\n\
         • Elevated: 130-139/85-89 mmHg\n\n\
         💡 {}",
        m.blood_pressure,
        tier.advice()
    ))
}

pub(super) fn heart_rate(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let tier = HeartTier::of(m.heart_rate);
    Ok(format!(
        "Your heart rate is currently {} bpm, which is {tier}.\n\n\
         📊 Normal range: 60-100 bpm (resting)\n\
         💡 Context: {}\n\n\
         Your other cardiovascular metrics are also good: Blood pressure {} mmHg, Oxygen {}%.",
        m.heart_rate,
        tier.context(),
        m.blood_pressure,
        m.oxygen
    ))
}

pub(super) fn steps(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let progress = steps_percent(m);
    let remaining = group_thousands(STEP_GOAL.saturating_sub(m.steps));
    let current = group_thousands(m.steps);

    let (assessment, advice) = if m.steps >= STEP_GOAL {
        (
            "🌟 Outstanding! You've exceeded your daily goal!".to_string(),
            "Keep up this excellent activity level. Regular walking reduces heart disease risk by 31%.".to_string(),
        )
    } else if m.steps >= 7_000 {
        (
            format!("💪 Great progress! You're at {progress}% of your goal."),
            format!(
                "Just {remaining} steps more (about a 15-minute walk) to hit 10,000 today."
            ),
        )
    } else if m.steps >= 4_000 {
        (
            format!("👍 You're making progress at {progress}%."),
            format!("You need {remaining} more steps. A brisk 30-minute walk adds ~3,000 steps."),
        )
    } else {
        (
            format!("📈 Current activity: {current} steps ({progress}%)."),
            "Try to reach at least 5,000 steps today. Take the stairs, park farther away, or take short walking breaks every hour.".to_string(),
        )
    };

    Ok(format!(
        "🚶 Step Count Analysis:\n\n\
         Current: {current} steps\n\
         Goal: 10,000 steps\n\
         Progress: {progress}%\n\n\
         {assessment}\n\n\
         💡 {advice}"
    ))
}

pub(super) fn water(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let liters = m.water_intake_liters;
    let progress = water_percent(m);
    let remaining = (WATER_GOAL_LITERS - liters).max(0.0);

    let (status, advice) = if liters >= WATER_GOAL_LITERS {
        (
            "💯 Perfect! You've met your daily hydration goal.".to_string(),
            "Excellent hydration supports kidney function, skin health, and mental clarity.".to_string(),
        )
    } else if liters >= 2.0 {
        (
            format!("💧 Good hydration at {progress}%."),
            format!("Just {remaining:.1}L more (about 2-3 glasses) to reach optimal hydration."),
        )
    } else if liters >= 1.5 {
        (
            format!("⚠️ Moderate hydration at {progress}%."),
            format!(
                "Drink {remaining:.1}L more today. Dehydration can cause fatigue and reduced focus."
            ),
        )
    } else {
        (
            format!("🚨 Low hydration at {progress}%."),
            format!(
                "You need {remaining:.1}L more water. Keep a water bottle nearby and set hourly reminders."
            ),
        )
    };

    Ok(format!(
        "💧 Hydration Status:\n\n\
         Current: {liters:.1}L\n\
         Daily Goal: 2.5L\n\
         Progress: {progress}%\n\n\
         {status}\n\n\
         💡 {advice}"
    ))
}

pub(super) fn oxygen(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let (status, advice) = if m.oxygen >= 95.0 {
        (
            "🟢 Excellent",
            "Your lungs and circulatory system are functioning optimally.",
        )
    } else if m.oxygen >= 90.0 {
        (
            "🟡 Acceptable (monitor)",
            "This is on the lower end. Monitor for symptoms like shortness of breath.",
        )
    } else {
        (
            "🔴 Low (seek medical attention)",
            "Levels below 90% require immediate medical evaluation.",
        )
    };

    Ok(format!(
        "🫁 Blood Oxygen Analysis:\n\n\
         Current: {}%\n\
         Status: {status}\n\
         Normal Range: 95-100%\n\n\
         💡 {advice}",
        m.oxygen
    ))
}

pub(super) fn temperature(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let celsius = m.temperature;
    let (status, advice) = if (36.1..=37.2).contains(&celsius) {
        (
            "🟢 Normal",
            "Your body temperature is in the healthy range.",
        )
    } else if celsius > 37.5 {
        (
            "🔴 Elevated (possible fever)",
            "Monitor for other symptoms. If it rises above 38°C or persists with other symptoms, consult a doctor.",
        )
    } else {
        (
            "🔵 Below normal",
            "This is slightly low. Ensure you're warm, rested, and properly nourished.",
        )
    };

    Ok(format!(
        "🌡️ Body Temperature:\n\n\
         Current: {celsius:.1}°C\n\
         Status: {status}\n\
         Normal Range: 36.1-37.2°C\n\n\
         💡 {advice}"
    ))
}

pub(super) fn general_health(
    m: &MetricsSnapshot,
    _entropy: &dyn Entropy,
) -> Result<String, ChatError> {
    let heart_ok = heart_ok(m.heart_rate);
    let steps_ok = m.steps >= 7_000;
    let water_ok = m.water_intake_liters >= 2.0;

    let headline = if heart_ok && steps_ok { "✅" } else { "⚠️" };
    let overall = if heart_ok && steps_ok && water_ok {
        "You're doing great! All key metrics are healthy.".to_string()
    } else {
        let lagging: Vec<&str> = [
            (!steps_ok, "activity"),
            (!water_ok, "hydration"),
            (!heart_ok, "heart rate"),
        ]
        .into_iter()
        .filter_map(|(lagging, area)| lagging.then_some(area))
        .collect();
        format!(
            "You're doing well, but there's room for improvement in {}.",
            lagging.join(" and ")
        )
    };

    Ok(format!(
        "{headline} Here's your complete health status:\n\n\
         ❤️ Heart Rate: {} bpm {}\n\
         🚶 Steps: {} ({}% of daily goal)\n\
         💧 Water: {:.1}L ({}% of daily goal)\n\
         🩺 Blood Pressure: {} mmHg (normal)\n\
         🫁 Oxygen: {}% (excellent)\n\
         🌡️ Temperature: {:.1}°C (normal)\n\n\
         Overall: {overall}",
        m.heart_rate,
        if heart_ok { "(healthy)" } else { "(check needed)" },
        group_thousands(m.steps),
        steps_percent(m),
        m.water_intake_liters,
        water_percent(m),
        m.blood_pressure,
        m.oxygen,
        m.temperature,
    ))
}

pub(super) fn all_metrics(m: &MetricsSnapshot, _entropy: &dyn Entropy) -> Result<String, ChatError> {
    let heart_status = if heart_ok(m.heart_rate) {
        "✓ Healthy"
    } else {
        "⚠ Check"
    };

    Ok(format!(
        "📊 Complete Health Dashboard\n\n\
         ❤️ HEART RATE: {} bpm\n   \
         Normal: 60-100 bpm | Status: {heart_status}\n\n\
         🩺 BLOOD PRESSURE: {} mmHg\n   \
         Normal: <120/80 | Status: ✓ Normal\n\n\
         🚶 STEPS: {}\n   \
         Goal: 10,000 | Progress: {}%\n\n\
         💧 WATER: {:.1}L\n   \
         Goal: 2.5L | Progress: {}%\n\n\
         🫁 OXYGEN: {}%\n   \
         Normal: 95-100% | Status: ✓ Excellent\n\n\
         🌡️ TEMPERATURE: {:.1}°C\n   \
         Normal: 36.1-37.2°C | Status: ✓ Normal\n\n\
         Ask me about any specific metric for detailed insights!",
        m.heart_rate,
        m.blood_pressure,
        group_thousands(m.steps),
        steps_percent(m),
        m.water_intake_liters,
        water_percent(m),
        m.oxygen,
        m.temperature,
    ))
}

pub(super) fn recommendation(
    m: &MetricsSnapshot,
    _entropy: &dyn Entropy,
) -> Result<String, ChatError> {
    let steps = group_thousands(m.steps);
    let liters = m.water_intake_liters;
    let mut suggestions = Vec::new();

    if m.steps < 5_000 {
        suggestions.push(format!(
            "🚶 **Increase Activity**: You're at {steps} steps. Aim for 7,000+ today. Even a 20-minute walk adds 2,000 steps."
        ));
    }
    if liters < 2.0 {
        suggestions.push(format!(
            "💧 **Hydrate More**: At {liters:.1}L, you need {:.1}L more. Try drinking a glass of water every 2 hours.",
            WATER_GOAL_LITERS - liters
        ));
    }
    if m.heart_rate > 85 {
        suggestions.push(format!(
            "❤️ **Manage Stress**: Heart rate is {} bpm. Try deep breathing, meditation, or light stretching exercises.",
            m.heart_rate
        ));
    }
    if m.steps >= 7_000 && liters >= 2.0 && (60..=85).contains(&m.heart_rate) {
        suggestions.push(
            "🌟 **You're Crushing It!**: All metrics are in excellent ranges. Keep up your healthy routine!".to_string(),
        );
    }
    if suggestions.is_empty() {
        suggestions.push(format!(
            "✅ **All Metrics Look Great!** Your heart rate ({} bpm), activity level ({steps} steps), and hydration ({liters:.1}L) are all in healthy ranges. Just maintain your current routine.",
            m.heart_rate
        ));
    }

    Ok(format!(
        "💡 Personalized Health Recommendations:\n\n{}\n\n\
         Your blood pressure ({} mmHg), oxygen ({}%), and temperature ({:.1}°C) are all excellent!",
        suggestions.join("\n\n"),
        m.blood_pressure,
        m.oxygen,
        m.temperature
    ))
}

/// The four generic summaries the fallback picks from.
pub(super) fn summaries(m: &MetricsSnapshot) -> [String; 4] {
    let hr = m.heart_rate;
    let heart = HeartTier::of(hr).short();
    let steps = group_thousands(m.steps);
    let steps_pct = steps_percent(m);
    let water = m.water_intake_liters;
    let water_pct = water_percent(m);
    let bp = &m.blood_pressure;
    let oxygen = m.oxygen;
    let temp = m.temperature;

    [
        format!(
            "I'm analyzing your health data. Your heart rate is {hr} bpm ({heart}), you've taken {steps} steps ({steps_pct}% of goal), and consumed {water:.1}L water ({water_pct}% of goal). Your blood pressure ({bp} mmHg) and temperature ({temp:.1}°C) are both normal. What specific metric would you like to explore?"
        ),
        format!(
            "Here's what I see: Heart rate at {hr} bpm, {steps} steps logged, {water:.1}L water intake. Your BP reads {bp} mmHg and oxygen is {oxygen}%. All vitals are stable. Ask me about any metric for detailed insights!"
        ),
        format!(
            "Current health snapshot: {hr} bpm heart rate ({heart}), {steps} steps ({steps_pct}% progress), {water:.1}L water ({water_pct}% of target). Blood pressure and body temp are within normal ranges at {bp} mmHg and {temp:.1}°C. Need details on anything specific?"
        ),
        format!(
            "Your vitals: Heart is beating at {hr} bpm, you've walked {steps} steps today, and drank {water:.1}L of water. Blood pressure {bp} mmHg (normal), oxygen {oxygen}% (excellent), temperature {temp:.1}°C (normal). Which metric should we dive into?"
        ),
    ]
}
