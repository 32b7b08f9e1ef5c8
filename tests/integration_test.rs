use std::io::Write;
use tempfile::NamedTempFile;
use vitals_voice::app::{App, AppMode};
use vitals_voice::engine::config::{Config, Language, VitalsConfig};
use vitals_voice::ui::{command_to_app_event, parse_command};
use vitals_voice::vitals::VitalField;

fn submit(app: &mut App, line: &str) {
    app.handle_event(command_to_app_event(parse_command(line)));
}

#[test]
fn end_to_end_voice_form() {
    let mut app = App::new();

    submit(&mut app, "one one zero");
    submit(&mut app, "yes");
    submit(&mut app, "one hundred and thirty five");
    submit(&mut app, "yeah");
    submit(&mut app, ":lang sw");
    submit(&mut app, "themanini");
    submit(&mut app, "ndiyo");
    submit(&mut app, "ruka");

    assert_eq!(app.mode(), AppMode::Complete);
    assert_eq!(app.language(), Language::Swahili);
    assert_eq!(
        app.form().summary(),
        "glucose=110 mg/dL, systolic=135 mmHg, diastolic=80 mmHg, heartRate=-"
    );
}

#[test]
fn replayed_transcript_file_fills_form() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "mia moja ishirini\nndio\n\nmia moja arobaini\nndio\ntisini\nndio\nsabini na mbili\nndio\n"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut app = App::new();
    submit(&mut app, &format!("@{}", path));

    assert_eq!(app.mode(), AppMode::Complete);
    assert_eq!(app.form().get(VitalField::Glucose), Some(120));
    assert_eq!(app.form().get(VitalField::Systolic), Some(140));
    assert_eq!(app.form().get(VitalField::Diastolic), Some(90));
    assert_eq!(app.form().get(VitalField::HeartRate), Some(72));
}

#[test]
fn custom_ranges_are_enforced() {
    let config = Config {
        vitals: VitalsConfig {
            glucose: 70..=180,
            ..VitalsConfig::default()
        },
        ..Config::default()
    };
    let mut app = App::with_config(&config);

    submit(&mut app, "fifty");
    assert_eq!(app.mode(), AppMode::Prompting(VitalField::Glucose));
    assert_eq!(
        app.status(),
        Some("50 is out of range. Valid range is 70 to 180. Please try again.")
    );
}

#[test]
fn commands_do_not_reach_the_parser() {
    let mut app = App::new();
    submit(&mut app, ":help");
    assert_eq!(app.mode(), AppMode::Prompting(VitalField::Glucose));
    submit(&mut app, ":nonsense");
    assert_eq!(app.status(), Some("Unknown command: :nonsense"));
    submit(&mut app, ":q");
    assert_eq!(app.mode(), AppMode::Quit);
}
