use chrono::NaiveDateTime;
use plq_core::{Boundary, QueryForm, TimeUnit};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: default_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        println!("{message}");
    }

    /// Warnings go to stderr so a filter written to stdout stays parseable.
    pub fn print_warning(&self, message: &str) {
        let mut line = format!("warning: {message}");
        if self.opts.use_color {
            line = line.with(Color::Yellow).to_string();
        }
        eprintln!("{line}");
    }

    /// Prints every input of the form with its validity, then the range it would query.
    pub fn print_validity(&self, form: &QueryForm) {
        let validity = form.validity();
        let mut md = String::from("|:-|:-:|:-:|\n|**field**|**start**|**end**|\n|-:|:-:|:-:|\n");

        let dates: Vec<String> = [Boundary::Start, Boundary::End]
            .into_iter()
            .map(|b| match form.boundary(b).date {
                Some(date) => format!("{} ✓", date.format("%Y-%m-%d")),
                None => "unset ✗".to_string(),
            })
            .collect();
        md.push_str(&format!("|date|{}|{}|\n", dates[0], dates[1]));

        for unit in [TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second] {
            let cells: Vec<String> = [Boundary::Start, Boundary::End]
                .into_iter()
                .map(|b| {
                    let text = match form.time_text(b, unit) {
                        None => "·".to_string(),
                        Some("") => "blank".to_string(),
                        Some(text) => text.to_string(),
                    };
                    let time = validity.time(b);
                    let mark = match unit {
                        TimeUnit::Hour => flag(time.hour),
                        TimeUnit::Minute => flag(time.minute),
                        TimeUnit::Second if time.seconds_enabled() => "enabled",
                        TimeUnit::Second => "disabled",
                    };
                    format!("{text} {mark}")
                })
                .collect();
            md.push_str(&format!("|{}|{}|{}|\n", unit.as_ref(), cells[0], cells[1]));
        }
        md.push_str("|-|\n");
        self.print_md(&md);

        let filter = form.build_filter();
        self.print_md(&format!(
            "\n**range:** {} → {}\n",
            timestamp(filter.start_time),
            timestamp(filter.end_time)
        ));
    }
}

fn flag(valid: bool) -> &'static str {
    if valid { "✓" } else { "✗" }
}

fn timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "open".to_string())
}

fn default_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.table.set_fg(Color::Magenta);
    skin
}
