use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_events(input_events: Vec<egui::Event>, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput {
        modifiers,
        ..Default::default()
    };
    raw_input.events = input_events;

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

#[test]
fn test_arrow_right_increases_quality() {
    let events = collect_with_events(
        vec![key_event(egui::Key::ArrowRight, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    assert!(matches!(
        events.as_slice(),
        [AppIntent::QualityIncreaseRequested]
    ));
}

#[test]
fn test_arrow_left_decreases_quality() {
    let events = collect_with_events(
        vec![key_event(egui::Key::ArrowLeft, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    assert!(matches!(
        events.as_slice(),
        [AppIntent::QualityDecreaseRequested]
    ));
}

#[test]
fn test_minus_decreases_quality() {
    let events = collect_with_events(
        vec![key_event(egui::Key::Minus, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::QualityDecreaseRequested)));
}

#[test]
fn test_ctrl_q_requests_exit() {
    let events = collect_with_events(
        vec![key_event(egui::Key::Q, egui::Modifiers::COMMAND)],
        egui::Modifiers::COMMAND,
    );
    assert!(matches!(events.as_slice(), [AppIntent::ExitRequested]));
}

#[test]
fn test_plain_q_is_ignored() {
    let events = collect_with_events(
        vec![key_event(egui::Key::Q, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    assert!(events.is_empty());
}
