use crate::{Cli, render::Renderer};
use plq_core::{
    Attribute, Boundary, Config, QueryForm, TimeUnit,
    dates::{ParseOptions, parse_date_token},
};

/// Replays the command line into a fresh form, field by field, as a user filling it in.
///
/// Time values are typed then blurred. Dates that do not parse leave their field unset.
pub fn fill_form(cli: &Cli, config: &Config, renderer: &Renderer) -> QueryForm {
    let formats = config.date_formats();
    let opts = ParseOptions {
        reference_date: None,
        formats: Some(formats.as_slice()),
    };

    let boundaries = [
        (
            Boundary::Start,
            &cli.from,
            [&cli.from_hour, &cli.from_minute, &cli.from_second],
        ),
        (
            Boundary::End,
            &cli.to,
            [&cli.to_hour, &cli.to_minute, &cli.to_second],
        ),
    ];

    let mut form = QueryForm::new();
    for (boundary, date, times) in boundaries {
        if let Some(text) = date {
            match parse_date_token(text, Some(opts)) {
                Some(date) => form.on_date_selected(boundary, Some(date)),
                None => renderer.print_warning(&format!(
                    "'{text}' is not a date; the {} of the range stays open",
                    boundary.as_ref()
                )),
            }
        }
        for (unit, text) in [TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second]
            .into_iter()
            .zip(times)
        {
            if let Some(text) = text {
                form.type_text(boundary, unit, text);
                form.on_blur(boundary, unit);
            }
        }
    }

    let attributes = [
        (Attribute::LicensePlates, &cli.plates),
        (Attribute::Colors, &cli.colors),
        (Attribute::Models, &cli.models),
        (Attribute::Makes, &cli.makes),
    ];
    for (attribute, words) in attributes {
        if !words.is_empty() {
            form.type_attribute(attribute, &words.join(" "));
        }
    }

    for (boundary, unit) in form.invalid_fields() {
        renderer.print_warning(&format!(
            "{} {} is out of range and was cleared",
            boundary.as_ref(),
            unit.as_ref()
        ));
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderOptions;
    use chrono::NaiveDate;
    use clap::Parser;

    fn fill(args: &[&str]) -> QueryForm {
        let cli = Cli::try_parse_from(std::iter::once("plq").chain(args.iter().copied())).unwrap();
        let renderer = Renderer::new(Some(RenderOptions { use_color: false }));
        fill_form(&cli, &Config::default(), &renderer)
    }

    #[test]
    fn dates_only_span_whole_days() {
        let form = fill(&["--from", "2024-01-01", "--to", "31/01/2024"]);
        let filter = form.build_filter();
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        assert_eq!(filter.start_time, day(1).and_hms_opt(0, 0, 0));
        assert_eq!(filter.end_time, day(31).and_hms_opt(0, 59, 59));
    }

    #[test]
    fn times_are_typed_and_blurred() {
        let form = fill(&["--from", "2024-03-05", "--from-hour", "7", "--from-minute", "3x0"]);
        assert_eq!(form.time_text(Boundary::Start, TimeUnit::Hour), Some("07"));
        assert_eq!(form.time_text(Boundary::Start, TimeUnit::Minute), Some("30"));
        assert!(form.validity().start.minute);
    }

    #[test]
    fn bad_date_leaves_range_open() {
        let form = fill(&["--from", "someday", "--to-hour", "99"]);
        assert!(!form.validity().start_date);
        assert_eq!(form.build_filter().start_time, None);
        assert_eq!(form.invalid_fields(), vec![(Boundary::End, TimeUnit::Hour)]);
    }

    #[test]
    fn attribute_words_are_joined() {
        let form = fill(&["--plates", "1234ABC", "5678DEF", "--colors", "red", "dark-blue"]);
        let filter = form.build_filter();
        assert_eq!(filter.license_plates, vec!["1234ABC", "5678DEF"]);
        assert_eq!(filter.colors, vec!["red", "darkblue"]);
    }

    #[test]
    fn config_path_conflicts_with_form() {
        let res = Cli::try_parse_from(["plq", "--config-path", "--from", "today"]);
        assert!(res.is_err());
    }
}
