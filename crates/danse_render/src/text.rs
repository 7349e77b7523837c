use std::fmt::Write as _;

use danse_core::ability::Ability;
use danse_core::core_api::Session;
use danse_core::rules::signed;
use danse_core::skill::Skill;

use crate::{
    NO_ARMOR, NO_BONUS_ACTION, NO_CAPACITY, NO_TRAIT, NO_WEAPON, OTHER_ACTIONS, OTHER_BONUS_ACTIONS,
};

const SHEET_WIDTH: usize = 76;
const ABILITY_COL_WIDTH: usize = 22;
const SAVE_COL_WIDTH: usize = 20;
const SKILL_COL_WIDTH: usize = 34;

pub fn render_text(session: &Session) -> String {
    let combat = session.combat();
    let mut out = String::new();

    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing("DANSE MACABRE", SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(
        &mut out,
        "{}",
        centered_no_trailing(session.display_name(), SHEET_WIDTH)
    )
    .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(
        &mut out,
        "  CA: {:<6}PV: {:<6}Initiative: {:<5}Vitesse: {:<7}Dés de vie: {}",
        combat.armor_class,
        combat.hit_points,
        signed(combat.initiative),
        combat.speed,
        combat.hit_die
    )
    .expect("writing to String cannot fail");
    let mut mastery_line = format!("  Maîtrise: {}", signed(combat.mastery_bonus));
    if let Some(difficulty) = session.power_difficulty() {
        mastery_line.push_str(&format!("    DD des pouvoirs: {difficulty}"));
    }
    writeln!(&mut out, "{mastery_line}").expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    write_abilities_grid(&mut out, session);
    writeln!(&mut out).expect("writing to String cannot fail");
    write_capacities(&mut out, session);
    writeln!(&mut out).expect("writing to String cannot fail");
    write_equipment(&mut out, session);
    writeln!(&mut out).expect("writing to String cannot fail");
    write_actions(&mut out, session);

    out
}

fn write_abilities_grid(out: &mut String, session: &Session) {
    writeln!(
        out,
        " ::: Caractéristiques :::  ::: Sauvegardes :::  ::: Compétences :::"
    )
    .expect("writing to String cannot fail");

    let ability_lines: Vec<String> = session
        .abilities()
        .iter()
        .map(|entry| {
            format!(
                "{}: {:02} ({})",
                entry.ability.abbreviation(),
                entry.score,
                signed(entry.modifier)
            )
        })
        .collect();
    let save_lines: Vec<String> = session
        .saves()
        .iter()
        .map(|save| {
            let mark = if save.mastered { " *" } else { "" };
            format!(
                "{}: {}{}",
                save.ability.abbreviation(),
                signed(save.modifier),
                mark
            )
        })
        .collect();
    let skill_lines: Vec<String> = Ability::ALL
        .into_iter()
        .flat_map(Skill::governed_by)
        .map(|skill| {
            let entry = session.skill(skill);
            let mark = if entry.mastered { " *" } else { "" };
            format!("{}: {}{}", skill.name(), signed(entry.modifier), mark)
        })
        .collect();

    let row_count = ability_lines
        .len()
        .max(save_lines.len())
        .max(skill_lines.len());
    for row in 0..row_count {
        let left = ability_lines.get(row).map(String::as_str).unwrap_or("");
        let middle = save_lines.get(row).map(String::as_str).unwrap_or("");
        let right = skill_lines.get(row).map(String::as_str).unwrap_or("");
        let line = format!(
            " {}{}{}",
            pad_column(left, ABILITY_COL_WIDTH),
            pad_column(middle, SAVE_COL_WIDTH),
            pad_column(right, SKILL_COL_WIDTH),
        );
        writeln!(out, "{}", line.trim_end()).expect("writing to String cannot fail");
    }
}

fn write_capacities(out: &mut String, session: &Session) {
    let sheet = session.sheet();
    writeln!(out, " ::: Capacités :::").expect("writing to String cannot fail");
    if sheet.active_abilities.is_empty() {
        writeln!(out, "  {NO_CAPACITY}").expect("writing to String cannot fail");
    }
    for active in &sheet.active_abilities {
        let line = match active.summary.as_deref() {
            Some(summary) if !summary.is_empty() => {
                format!("  {} (niveau {}) - {}", active.name, active.level, summary)
            }
            _ => format!("  {} (niveau {})", active.name, active.level),
        };
        writeln!(out, "{line}").expect("writing to String cannot fail");
    }

    writeln!(out).expect("writing to String cannot fail");
    writeln!(out, " ::: Traits :::").expect("writing to String cannot fail");
    if sheet.passive_abilities.is_empty() {
        writeln!(out, "  {NO_TRAIT}").expect("writing to String cannot fail");
    }
    for passive in &sheet.passive_abilities {
        writeln!(out, "  {}", passive.name).expect("writing to String cannot fail");
    }
    if !sheet.immunities.is_empty() {
        writeln!(out, "  Immunités: {}", sheet.immunities.join(", "))
            .expect("writing to String cannot fail");
    }
    if !sheet.resistances.is_empty() {
        writeln!(out, "  Résistances: {}", sheet.resistances.join(", "))
            .expect("writing to String cannot fail");
    }

    if !sheet.future_abilities.is_empty() {
        writeln!(out).expect("writing to String cannot fail");
        writeln!(out, " ::: Progression :::").expect("writing to String cannot fail");
        for future in &sheet.future_abilities {
            writeln!(
                out,
                "  Niveau {:02}: {} ({})",
                future.level, future.name, future.source
            )
            .expect("writing to String cannot fail");
        }
    }
}

fn write_equipment(out: &mut String, session: &Session) {
    writeln!(out, " ::: Équipement :::").expect("writing to String cannot fail");
    let armor_line = match session.armor() {
        Some(armor) => format!(
            "  {} ({}): CA {} + mod({}) = {}",
            armor.name, armor.kind, armor.ac_bonus, armor.governing_ability, armor.effective_ac
        ),
        None => format!("  {NO_ARMOR}"),
    };
    writeln!(out, "{armor_line}").expect("writing to String cannot fail");

    let weapons = session.weapons();
    if weapons.is_empty() {
        writeln!(out, "  {NO_WEAPON}").expect("writing to String cannot fail");
    }
    for weapon in &weapons {
        let line = format!(
            "  {} ({}): {}",
            weapon.name,
            weapon.kind,
            weapon.damage_display()
        );
        writeln!(
            out,
            "{}Portée: {}",
            pad_column(&line, SHEET_WIDTH / 2),
            weapon.range
        )
        .expect("writing to String cannot fail");
    }
}

fn write_actions(out: &mut String, session: &Session) {
    writeln!(out, " ::: Actions bonus :::").expect("writing to String cannot fail");
    let actions = session.actions();
    if actions.bonus_actions.is_empty() {
        writeln!(out, "  {NO_BONUS_ACTION}").expect("writing to String cannot fail");
    }
    for bonus in &actions.bonus_actions {
        writeln!(out, "  {}", bonus.name).expect("writing to String cannot fail");
    }
    writeln!(out).expect("writing to String cannot fail");
    writeln!(out, " ::: Autres actions :::").expect("writing to String cannot fail");
    writeln!(out, "  {}.", OTHER_ACTIONS.join(", ")).expect("writing to String cannot fail");
    writeln!(out, "  Bonus: {}.", OTHER_BONUS_ACTIONS.join(", "))
        .expect("writing to String cannot fail");
}

// Pads by character count, since accented names are multi-byte.
fn pad_column(value: &str, width: usize) -> String {
    let fitted = fit_column(value, width);
    let len = fitted.chars().count();
    format!("{fitted}{}", " ".repeat(width.saturating_sub(len)))
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

fn centered_no_trailing(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}
