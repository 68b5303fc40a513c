//! Integration Tests für den Puls-Sequencer
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen die Mocks aus `common`

mod common;

use common::{BRIGHTNESS, Event, IDLE_COLOR, TIMING, events, sequencer};
use embassy_futures::block_on;
use wristband_core::{
    ActuatorBank, ActuatorId, ActuatorSet, IndicatorColor, Motion, MotionDefinition,
    MotionLibrary,
};

const ALL_MOTIONS: [Motion; 8] = [
    Motion::Idle,
    Motion::Up,
    Motion::Right,
    Motion::Left,
    Motion::Down,
    Motion::Clockwise,
    Motion::CounterClockwise,
    Motion::All,
];

/// Erwartete Events für einen einzelnen Puls
fn pulse_events(actuators: ActuatorSet, color: IndicatorColor) -> [Event; 6] {
    [
        Event::Apply(actuators),
        Event::Color(color.rgb(BRIGHTNESS)),
        Event::Delay(TIMING.on_ms),
        Event::Apply(ActuatorSet::NONE),
        Event::Color(IDLE_COLOR),
        Event::Delay(TIMING.off_ms),
    ]
}

// ============================================================================
// Tests: Szenarien
// ============================================================================

#[test]
fn test_clockwise_scenario_event_order() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();

    let report = block_on(sequencer.execute(&library.resolve(b'5')));

    let expected: Vec<Event> = [
        (ActuatorId::M1, IndicatorColor::Red),
        (ActuatorId::M2, IndicatorColor::Green),
        (ActuatorId::M4, IndicatorColor::Yellow),
        (ActuatorId::M3, IndicatorColor::Blue),
    ]
    .into_iter()
    .flat_map(|(id, color)| pulse_events(ActuatorSet::single(id), color))
    .collect();

    assert_eq!(events(&log), expected);
    assert_eq!(report.motion, Motion::Clockwise);
    assert_eq!(report.steps_run, 4);
    assert_eq!(report.indicator_failures, 0);
}

#[test]
fn test_counter_clockwise_activation_order() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();

    block_on(sequencer.execute(&library.resolve(b'6')));

    let activations: Vec<u8> = events(&log)
        .into_iter()
        .filter_map(|event| match event {
            Event::Apply(set) if !set.is_idle() => Some(set),
            _ => None,
        })
        .flat_map(|set| set.iter().map(|id| id.index()).collect::<Vec<_>>())
        .collect();

    assert_eq!(activations, [1, 3, 4, 2]);
}

#[test]
fn test_all_pulse_energizes_every_actuator_at_once() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();

    block_on(sequencer.execute(&library.resolve(b'7')));

    assert_eq!(
        events(&log),
        pulse_events(ActuatorSet::ALL, IndicatorColor::White)
    );
}

#[test]
fn test_invalid_symbol_performs_no_activation() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();

    let report = block_on(sequencer.execute(&library.resolve(b'9')));

    assert_eq!(report.motion, Motion::Idle);
    assert_eq!(report.steps_run, 0);
    assert_eq!(
        events(&log),
        [Event::Apply(ActuatorSet::NONE), Event::Color(IDLE_COLOR)]
    );
}

// ============================================================================
// Tests: Invarianten
// ============================================================================

#[test]
fn test_every_motion_ends_idle() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);

    for motion in ALL_MOTIONS {
        let (mut sequencer, log) = sequencer();
        let definition = library.definition(motion);

        let report = block_on(sequencer.execute(&definition));

        assert!(sequencer.actuators().active().is_idle(), "{:?}", motion);
        assert_eq!(report.steps_run, definition.steps.len());

        // Jede Aktivierung wird vor der nächsten wieder abgeschaltet
        let applies: Vec<ActuatorSet> = events(&log)
            .into_iter()
            .filter_map(|event| match event {
                Event::Apply(set) => Some(set),
                _ => None,
            })
            .collect();
        for pair in applies.windows(2) {
            assert!(pair[0].is_idle() || pair[1].is_idle(), "{:?}", motion);
        }
        assert_eq!(applies.last(), Some(&ActuatorSet::NONE));
    }
}

#[test]
fn test_idle_is_idempotent() {
    let (mut sequencer, log) = sequencer();

    block_on(sequencer.execute(&MotionDefinition::IDLE));
    assert!(sequencer.actuators().active().is_idle());
    let first = events(&log);

    block_on(sequencer.execute(&MotionDefinition::IDLE));
    assert!(sequencer.actuators().active().is_idle());

    let all = events(&log);
    assert_eq!(all.len(), first.len() * 2);
    assert_eq!(&all[..first.len()], &all[first.len()..]);
}

#[test]
fn test_indicator_failure_does_not_abort_motion() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();
    sequencer.indicator_mut().fail_writes = true;

    let report = block_on(sequencer.execute(&library.resolve(b'5')));

    assert_eq!(report.steps_run, 4);
    // Pro Schritt zwei LED-Schreibzugriffe (Schrittfarbe + Leerlauf)
    assert_eq!(report.indicator_failures, 8);
    assert!(sequencer.actuators().active().is_idle());
    assert!(events(&log).iter().all(|event| !matches!(event, Event::Color(_))));
}

#[test]
fn test_delays_match_step_timing() {
    let library = MotionLibrary::new(TIMING, BRIGHTNESS);
    let (mut sequencer, log) = sequencer();

    let definition = library.resolve(b'5');
    block_on(sequencer.execute(&definition));

    let waited: u32 = events(&log)
        .into_iter()
        .filter_map(|event| match event {
            Event::Delay(ms) => Some(ms),
            _ => None,
        })
        .sum();
    assert_eq!(waited, definition.duration_ms());
}
