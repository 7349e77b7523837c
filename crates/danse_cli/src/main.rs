mod logging;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use danse_core::core_api::{Engine, Session};
use danse_core::rules::signed;
use danse_render::{
    FieldSelection, HtmlRenderOptions, JsonStyle, OTHER_ACTIONS, OTHER_BONUS_ACTIONS,
    render_html_with_options, render_json_full, render_json_selected, render_json_string,
    render_text,
};
use tracing::{error, info};

use crate::logging::{LogConfig, LogFormat, init_logging};

const DEFAULT_CHARACTER_PATH: &str = "data/personnages/arkanis.json";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Character document to render.
    #[arg(value_name = "CHARACTER.json", default_value = DEFAULT_CHARACTER_PATH)]
    path: PathBuf,
    /// Print the computed values as JSON instead of an HTML page.
    #[arg(long, conflicts_with = "text")]
    json: bool,
    /// Print a plain-text sheet instead of an HTML page.
    #[arg(long)]
    text: bool,
    /// Stylesheet linked from the HTML page.
    #[arg(long, value_name = "HREF")]
    stylesheet: Option<String>,
    /// Write the rendered output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
    #[arg(long)]
    name: bool,
    #[arg(long = "ac")]
    armor_class: bool,
    #[arg(long = "hp")]
    hit_points: bool,
    #[arg(long)]
    initiative: bool,
    #[arg(long)]
    speed: bool,
    #[arg(long = "hit-die")]
    hit_die: bool,
    #[arg(long)]
    mastery: bool,
    #[arg(long)]
    abilities: bool,
    #[arg(long)]
    saves: bool,
    #[arg(long = "power-dc")]
    power_difficulty: bool,
    #[arg(long)]
    skills: bool,
    #[arg(long)]
    capacities: bool,
    #[arg(long)]
    traits: bool,
    #[arg(long)]
    defenses: bool,
    #[arg(long)]
    progression: bool,
    #[arg(long)]
    armor: bool,
    #[arg(long)]
    weapons: bool,
    #[arg(long)]
    actions: bool,
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    log_format: LogFormatArg,
}

fn fields_from_cli(cli: &Cli) -> FieldSelection {
    FieldSelection {
        name: cli.name,
        armor_class: cli.armor_class,
        hit_points: cli.hit_points,
        initiative: cli.initiative,
        speed: cli.speed,
        hit_die: cli.hit_die,
        mastery: cli.mastery,
        abilities: cli.abilities,
        saves: cli.saves,
        power_difficulty: cli.power_difficulty,
        skills: cli.skills,
        capacities: cli.capacities,
        traits: cli.traits,
        defenses: cli.defenses,
        progression: cli.progression,
        armor: cli.armor,
        weapons: cli.weapons,
        actions: cli.actions,
    }
}

fn selected_pairs(fields: &FieldSelection, session: &Session) -> Vec<(&'static str, String)> {
    let sheet = session.sheet();
    let mut out = Vec::new();

    if fields.name {
        out.push(("name", session.display_name().to_string()));
    }
    if fields.armor_class {
        out.push(("armor_class", session.armor_class().to_string()));
    }
    if fields.hit_points {
        out.push(("hit_points", session.hit_points().to_string()));
    }
    if fields.initiative {
        out.push(("initiative", signed(session.initiative())));
    }
    if fields.speed {
        out.push(("speed", session.combat().speed));
    }
    if fields.hit_die {
        out.push(("hit_die", session.combat().hit_die));
    }
    if fields.mastery {
        out.push(("mastery_bonus", signed(session.mastery_bonus())));
    }
    if fields.abilities {
        for a in session.abilities() {
            out.push((
                "ability",
                format!("{}={} ({})", a.ability, a.score, signed(a.modifier)),
            ));
        }
    }
    if fields.saves {
        for s in session.saves() {
            let tag = if s.mastered { " [Mastered]" } else { "" };
            out.push(("save", format!("{}={}{}", s.ability, signed(s.modifier), tag)));
        }
    }
    if fields.power_difficulty {
        out.push((
            "power_difficulty",
            session
                .power_difficulty()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ));
    }
    if fields.skills {
        for s in session.skills() {
            let tag = if s.mastered { " [Mastered]" } else { "" };
            out.push(("skill", format!("{}={}{}", s.skill, signed(s.modifier), tag)));
        }
    }
    if fields.capacities {
        for c in &sheet.active_abilities {
            out.push(("capacity", format!("{}={}", c.name, c.level)));
        }
    }
    if fields.traits {
        for t in &sheet.passive_abilities {
            out.push(("trait", t.name.clone()));
        }
    }
    if fields.defenses {
        for i in &sheet.immunities {
            out.push(("immunity", i.clone()));
        }
        for r in &sheet.resistances {
            out.push(("resistance", r.clone()));
        }
    }
    if fields.progression {
        for f in &sheet.future_abilities {
            out.push(("progression", format!("{}={} ({})", f.name, f.level, f.source)));
        }
    }
    if fields.armor {
        out.push((
            "armor",
            session
                .armor()
                .map(|a| format!("{}={}", a.name, a.effective_ac))
                .unwrap_or_else(|| "none".to_string()),
        ));
    }
    if fields.weapons {
        for w in session.weapons() {
            out.push(("weapon", format!("{}={}", w.name, w.damage_display())));
        }
    }
    if fields.actions {
        for b in session.actions().bonus_actions {
            out.push(("bonus_action", b.name));
        }
        for a in OTHER_ACTIONS {
            out.push(("other_action", a.to_string()));
        }
        for a in OTHER_BONUS_ACTIONS {
            out.push(("other_bonus_action", a.to_string()));
        }
    }

    out
}

fn main() {
    let cli = Cli::parse();
    init_logging(
        &LogConfig::from_verbosity(cli.verbose, cli.quiet).with_format(cli.log_format.into()),
    );

    let fields = fields_from_cli(&cli);

    let session = Engine::new().open_path(&cli.path).unwrap_or_else(|e| {
        error!(error = %e, "aborting render");
        eprintln!("Error loading {}", cli.path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    let rendered = if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&session, &fields, JsonStyle::CanonicalV1)
        } else {
            render_json_full(&session, JsonStyle::CanonicalV1)
        };
        let mut rendered = render_json_string(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        rendered.push('\n');
        rendered
    } else if fields.is_any_selected() {
        selected_pairs(&fields, &session)
            .into_iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    } else if cli.text {
        render_text(&session)
    } else {
        let options = HtmlRenderOptions {
            stylesheet: cli.stylesheet.clone(),
        };
        render_html_with_options(&session, &options)
    };

    match &cli.output {
        Some(out_path) => {
            fs::write(out_path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                process::exit(1);
            });
            info!(path = %out_path.display(), "wrote rendered sheet");
        }
        None => print!("{rendered}"),
    }
}
