//! Built-in tournament templates and template lookup.

use super::models::{
    BlindLevel, BlindTemplate, ChipEntry, ChipTemplate, TemplateError, TemplateResult,
    TournamentTemplate,
};

pub const STANDARD_TEMPLATE_ID: &str = "default-tournament";
pub const TURBO_TEMPLATE_ID: &str = "turbo-tournament";
pub const HIGH_ROLLER_TEMPLATE_ID: &str = "high-roller-tournament";

/// Standard structure: 8 levels, 20 minutes early, 10 at the end
pub fn standard_blinds() -> BlindTemplate {
    BlindTemplate {
        id: "default-blinds".to_string(),
        name: "Standard Structure".to_string(),
        levels: vec![
            BlindLevel::new("1", 25, 50, 20),
            BlindLevel::new("2", 50, 100, 20),
            BlindLevel::new("3", 100, 200, 20).with_ante(25),
            BlindLevel::new("4", 200, 400, 15).with_ante(50),
            BlindLevel::new("5", 300, 600, 15).with_ante(75),
            BlindLevel::new("6", 400, 800, 15).with_ante(100),
            BlindLevel::new("7", 500, 1000, 15).with_ante(125),
            BlindLevel::new("8", 1000, 2000, 10).with_ante(250),
        ],
    }
}

/// Turbo structure: 6 short levels, antes from level 2
pub fn turbo_blinds() -> BlindTemplate {
    BlindTemplate {
        id: "turbo-blinds".to_string(),
        name: "Turbo Structure".to_string(),
        levels: vec![
            BlindLevel::new("1", 25, 50, 10),
            BlindLevel::new("2", 50, 100, 10).with_ante(25),
            BlindLevel::new("3", 100, 200, 10).with_ante(50),
            BlindLevel::new("4", 200, 400, 8).with_ante(100),
            BlindLevel::new("5", 400, 800, 8).with_ante(200),
            BlindLevel::new("6", 800, 1600, 8).with_ante(400),
        ],
    }
}

pub fn standard_chips() -> ChipTemplate {
    ChipTemplate {
        id: "default-chips".to_string(),
        name: "Standard Stack".to_string(),
        chips: vec![
            ChipEntry::new(25, "#DC2626", 20),
            ChipEntry::new(100, "#2563EB", 20),
            ChipEntry::new(500, "#059669", 10),
            ChipEntry::new(1000, "#000000", 5),
        ],
    }
}

pub fn high_roller_chips() -> ChipTemplate {
    ChipTemplate {
        id: "high-roller-chips".to_string(),
        name: "High Roller Stack".to_string(),
        chips: vec![
            ChipEntry::new(100, "#DC2626", 20),
            ChipEntry::new(500, "#2563EB", 20),
            ChipEntry::new(1000, "#059669", 15),
            ChipEntry::new(5000, "#000000", 10),
            ChipEntry::new(10000, "#7C3AED", 5),
        ],
    }
}

pub fn standard_tournament() -> TournamentTemplate {
    TournamentTemplate {
        id: STANDARD_TEMPLATE_ID.to_string(),
        name: "Standard Tournament".to_string(),
        blind_template: standard_blinds(),
        chip_template: standard_chips(),
    }
}

pub fn turbo_tournament() -> TournamentTemplate {
    TournamentTemplate {
        id: TURBO_TEMPLATE_ID.to_string(),
        name: "Turbo Tournament".to_string(),
        blind_template: turbo_blinds(),
        chip_template: standard_chips(),
    }
}

/// Turbo timing with every blind and ante scaled up tenfold
pub fn high_roller_tournament() -> TournamentTemplate {
    let mut blinds = turbo_blinds();
    for level in &mut blinds.levels {
        level.small_blind *= 10;
        level.big_blind *= 10;
        level.ante *= 10;
    }

    TournamentTemplate {
        id: HIGH_ROLLER_TEMPLATE_ID.to_string(),
        name: "High Roller Tournament".to_string(),
        blind_template: blinds,
        chip_template: high_roller_chips(),
    }
}

/// Built-in templates in display order
pub fn default_templates() -> Vec<TournamentTemplate> {
    vec![
        standard_tournament(),
        turbo_tournament(),
        high_roller_tournament(),
    ]
}

/// Find a template by id or short alias (`standard`, `turbo`, `high-roller`).
///
/// Custom templates are searched after the built-in ones.
///
/// # Errors
///
/// Returns [`TemplateError::UnknownTemplate`] when nothing matches.
pub fn find_template(
    key: &str,
    custom: &[TournamentTemplate],
) -> TemplateResult<TournamentTemplate> {
    let key = key.trim();
    let id = match key.to_lowercase().as_str() {
        "standard" | "default" => STANDARD_TEMPLATE_ID.to_string(),
        "turbo" => TURBO_TEMPLATE_ID.to_string(),
        "high-roller" | "highroller" => HIGH_ROLLER_TEMPLATE_ID.to_string(),
        _ => key.to_string(),
    };

    default_templates()
        .into_iter()
        .chain(custom.iter().cloned())
        .find(|template| template.id == id || template.name.eq_ignore_ascii_case(key))
        .ok_or_else(|| TemplateError::UnknownTemplate(key.to_string()))
}

/// Parse a JSON array of custom templates, dropping any that fail validation
///
/// # Errors
///
/// Returns the JSON error if the document itself is malformed.
pub fn parse_custom_templates(json: &str) -> serde_json::Result<Vec<TournamentTemplate>> {
    let templates: Vec<TournamentTemplate> = serde_json::from_str(json)?;

    Ok(templates
        .into_iter()
        .filter(|template| match template.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Skipping template '{}': {}", template.id, e);
                false
            }
        })
        .collect())
}
