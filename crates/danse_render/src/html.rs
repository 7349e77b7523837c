//! Standalone HTML page for a character.
//!
//! Section ids match the page layout the stylesheets target
//! (`stats-block`, `sauvegardes-block`, `caracs-block`, ...). Every string
//! taken from the character document goes through [`escape_html`].

use std::fmt::Write as _;

use danse_core::ability::Ability;
use danse_core::core_api::Session;
use danse_core::rules::signed;
use danse_core::skill::Skill;

use crate::{
    MASTERED_MARK, NO_ARMOR, NO_BONUS_ACTION, NO_WEAPON, OTHER_ACTIONS, OTHER_BONUS_ACTIONS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRenderOptions {
    /// Linked from `<head>` when set.
    pub stylesheet: Option<String>,
}

pub fn render_html(session: &Session) -> String {
    render_html_with_options(session, &HtmlRenderOptions::default())
}

pub fn render_html_with_options(session: &Session, options: &HtmlRenderOptions) -> String {
    let name = escape_html(session.display_name());
    let mut out = String::new();

    writeln!(&mut out, "<!DOCTYPE html>").expect("writing to String cannot fail");
    writeln!(&mut out, "<html lang=\"fr\">").expect("writing to String cannot fail");
    writeln!(&mut out, "<head>").expect("writing to String cannot fail");
    writeln!(&mut out, "<meta charset=\"utf-8\">").expect("writing to String cannot fail");
    writeln!(&mut out, "<title>{name}</title>").expect("writing to String cannot fail");
    if let Some(href) = &options.stylesheet {
        writeln!(
            &mut out,
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(href)
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out, "</head>").expect("writing to String cannot fail");
    writeln!(&mut out, "<body>").expect("writing to String cannot fail");
    writeln!(&mut out, "<h1>{name}</h1>").expect("writing to String cannot fail");

    write_combat(&mut out, session);
    write_saves(&mut out, session);
    write_abilities_and_skills(&mut out, session);
    write_capacities(&mut out, session);
    write_traits(&mut out, session);
    write_progression(&mut out, session);
    write_equipment(&mut out, session);
    write_actions(&mut out, session);

    writeln!(&mut out, "</body>").expect("writing to String cannot fail");
    writeln!(&mut out, "</html>").expect("writing to String cannot fail");
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn write_combat(out: &mut String, session: &Session) {
    let combat = session.combat();
    writeln!(out, "<section id=\"stats-block\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Combat</h2>").expect("writing to String cannot fail");
    write_stat_line(out, "CA", &combat.armor_class.to_string());
    write_stat_line(out, "PV", &combat.hit_points.to_string());
    write_stat_line(out, "Initiative", &signed(combat.initiative));
    write_stat_line(out, "Vitesse", &combat.speed);
    write_stat_line(out, "Dés de vie", &combat.hit_die);
    write_stat_line(out, "Maîtrise", &signed(combat.mastery_bonus));
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_saves(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"sauvegardes-block\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Jets de sauvegarde</h2>").expect("writing to String cannot fail");
    for save in session.saves() {
        let value = format!("{}{}", signed(save.modifier), mastered_suffix(save.mastered));
        write_stat_line(out, save.ability.as_str(), &value);
    }
    if let Some(difficulty) = session.power_difficulty() {
        write_stat_line(out, "DD des pouvoirs", &difficulty.to_string());
    }
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_abilities_and_skills(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"caracs-block\">").expect("writing to String cannot fail");
    for entry in session.abilities() {
        writeln!(out, "<div class=\"carac-group\">").expect("writing to String cannot fail");
        writeln!(
            out,
            "<div class=\"carac-circle\"><div>{}</div><div>{}</div><div>{}</div></div>",
            entry.ability.abbreviation(),
            entry.score,
            signed(entry.modifier)
        )
        .expect("writing to String cannot fail");
        write_skill_list(out, session, entry.ability);
        writeln!(out, "</div>").expect("writing to String cannot fail");
    }
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_skill_list(out: &mut String, session: &Session, ability: Ability) {
    writeln!(out, "<ul>").expect("writing to String cannot fail");
    for skill in Skill::governed_by(ability) {
        let entry = session.skill(skill);
        writeln!(
            out,
            "<li>{} : {}{}</li>",
            skill.name(),
            signed(entry.modifier),
            mastered_suffix(entry.mastered)
        )
        .expect("writing to String cannot fail");
    }
    writeln!(out, "</ul>").expect("writing to String cannot fail");
}

fn write_capacities(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"capacites\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Capacités actives</h2>").expect("writing to String cannot fail");
    for active in &session.sheet().active_abilities {
        writeln!(out, "<div class=\"box\">").expect("writing to String cannot fail");
        writeln!(
            out,
            "<h3>{} (niveau {})</h3>",
            escape_html(&active.name),
            active.level
        )
        .expect("writing to String cannot fail");
        writeln!(
            out,
            "<p><em>{}</em></p>",
            escape_html(active.summary.as_deref().unwrap_or(""))
        )
        .expect("writing to String cannot fail");
        writeln!(
            out,
            "<p>{}</p>",
            escape_html(active.description.as_deref().unwrap_or(""))
        )
        .expect("writing to String cannot fail");
        writeln!(out, "</div>").expect("writing to String cannot fail");
    }
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_traits(out: &mut String, session: &Session) {
    let sheet = session.sheet();
    writeln!(out, "<section id=\"traits\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Traits, effets et passifs</h2>").expect("writing to String cannot fail");
    for passive in &sheet.passive_abilities {
        writeln!(out, "<div class=\"box\">").expect("writing to String cannot fail");
        writeln!(out, "<h3>{}</h3>", escape_html(&passive.name))
            .expect("writing to String cannot fail");
        writeln!(
            out,
            "<p>{}</p>",
            escape_html(passive.description.as_deref().unwrap_or(""))
        )
        .expect("writing to String cannot fail");
        writeln!(out, "</div>").expect("writing to String cannot fail");
    }

    if !sheet.immunities.is_empty() || !sheet.resistances.is_empty() {
        writeln!(out, "<div class=\"box\">").expect("writing to String cannot fail");
        writeln!(out, "<h3>Défenses</h3>").expect("writing to String cannot fail");
        if !sheet.immunities.is_empty() {
            write_stat_line(out, "Immunités", &escape_html(&sheet.immunities.join(", ")));
        }
        if !sheet.resistances.is_empty() {
            write_stat_line(
                out,
                "Résistances",
                &escape_html(&sheet.resistances.join(", ")),
            );
        }
        writeln!(out, "</div>").expect("writing to String cannot fail");
    }
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_progression(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"progression\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Progression</h2>").expect("writing to String cannot fail");
    for future in &session.sheet().future_abilities {
        writeln!(out, "<div class=\"box\">").expect("writing to String cannot fail");
        writeln!(out, "<h3>{}</h3>", escape_html(&future.name))
            .expect("writing to String cannot fail");
        write_stat_line(out, "Niveau", &future.level.to_string());
        write_stat_line(out, "Source", &escape_html(&future.source));
        writeln!(out, "</div>").expect("writing to String cannot fail");
    }
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_equipment(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"equipement\">").expect("writing to String cannot fail");

    writeln!(out, "<div id=\"armure-block\">").expect("writing to String cannot fail");
    match session.armor() {
        Some(armor) => {
            writeln!(out, "<h3>Armure portée</h3>").expect("writing to String cannot fail");
            writeln!(
                out,
                "<p><strong>{}</strong> ({})</p>",
                escape_html(&armor.name),
                escape_html(&armor.kind)
            )
            .expect("writing to String cannot fail");
            writeln!(
                out,
                "<p>CA : {} + mod({}) = <strong>{}</strong></p>",
                armor.ac_bonus,
                escape_html(&armor.governing_ability),
                armor.effective_ac
            )
            .expect("writing to String cannot fail");
        }
        None => {
            writeln!(out, "<p>{NO_ARMOR}</p>").expect("writing to String cannot fail");
        }
    }
    writeln!(out, "</div>").expect("writing to String cannot fail");

    writeln!(out, "<div id=\"armes-block\">").expect("writing to String cannot fail");
    let weapons = session.weapons();
    if weapons.is_empty() {
        writeln!(out, "<p>{NO_WEAPON}</p>").expect("writing to String cannot fail");
    } else {
        writeln!(out, "<h3>Armes</h3>").expect("writing to String cannot fail");
        for weapon in &weapons {
            writeln!(
                out,
                "<p><strong>{}</strong> ({})<br>",
                escape_html(&weapon.name),
                escape_html(&weapon.kind)
            )
            .expect("writing to String cannot fail");
            writeln!(
                out,
                "Dégâts : {} + mod({}) = <strong>{}</strong><br>",
                escape_html(&weapon.damage),
                escape_html(&weapon.governing_ability),
                escape_html(&weapon.damage_display())
            )
            .expect("writing to String cannot fail");
            writeln!(out, "Portée : {}</p>", escape_html(&weapon.range))
                .expect("writing to String cannot fail");
        }
    }
    writeln!(out, "</div>").expect("writing to String cannot fail");

    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_actions(out: &mut String, session: &Session) {
    writeln!(out, "<section id=\"action\">").expect("writing to String cannot fail");
    writeln!(out, "<h2>Actions</h2>").expect("writing to String cannot fail");
    writeln!(out, "<div class=\"actions-row\">").expect("writing to String cannot fail");

    writeln!(out, "<div class=\"action-box\"><h3>Attaques</h3>")
        .expect("writing to String cannot fail");
    let weapons = session.weapons();
    if weapons.is_empty() {
        writeln!(out, "<p class=\"sub-box\">{NO_WEAPON}</p>")
            .expect("writing to String cannot fail");
    }
    for weapon in &weapons {
        writeln!(
            out,
            "<div class=\"sub-box\"><strong>{}</strong> ({})<br>Dégâts : {}<br>Portée : {}</div>",
            escape_html(&weapon.name),
            escape_html(&weapon.kind),
            escape_html(&weapon.damage_display()),
            escape_html(&weapon.range)
        )
        .expect("writing to String cannot fail");
    }
    writeln!(out, "</div>").expect("writing to String cannot fail");

    writeln!(out, "<div class=\"action-box\"><h3>Actions Bonus</h3>")
        .expect("writing to String cannot fail");
    let actions = session.actions();
    if actions.bonus_actions.is_empty() {
        writeln!(out, "<p class=\"sub-box\">{NO_BONUS_ACTION}</p>")
            .expect("writing to String cannot fail");
    }
    for bonus in &actions.bonus_actions {
        writeln!(
            out,
            "<div class=\"sub-box\"><strong>{}</strong><br><em>{}</em><br>{}</div>",
            escape_html(&bonus.name),
            escape_html(bonus.summary.as_deref().unwrap_or("")),
            escape_html(bonus.description.as_deref().unwrap_or(""))
        )
        .expect("writing to String cannot fail");
    }
    writeln!(out, "</div>").expect("writing to String cannot fail");

    write_constant_action_box(out, "Autres Actions", &OTHER_ACTIONS);
    write_constant_action_box(out, "Autres Actions Bonus", &OTHER_BONUS_ACTIONS);

    writeln!(out, "</div>").expect("writing to String cannot fail");
    writeln!(out, "</section>").expect("writing to String cannot fail");
}

fn write_constant_action_box(out: &mut String, title: &str, actions: &[&str]) {
    writeln!(
        out,
        "<div class=\"action-box\"><h3>{title}</h3><div class=\"sub-box\">{}.</div></div>",
        escape_html(&actions.join(", "))
    )
    .expect("writing to String cannot fail");
}

// `value` must already be escaped.
fn write_stat_line(out: &mut String, label: &str, value: &str) {
    writeln!(out, "<p><strong>{label} :</strong> {value}</p>")
        .expect("writing to String cannot fail");
}

fn mastered_suffix(mastered: bool) -> String {
    if mastered {
        format!(" {MASTERED_MARK}")
    } else {
        String::new()
    }
}
