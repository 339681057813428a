//! The polling cycle

use storey_protocol::{ButtonId, InputEvent};

use super::{Mode, Outputs};
use crate::broker::{intake, select_call, IntakeOutcome};
use crate::config::ControllerConfig;
use crate::diagnostics::InputDiagnostics;
use crate::feedback::{DoorAnimation, SplashAnimation, ToneTimer};
use crate::floor::Floor;
use crate::motion::MotionEngine;
use crate::state::ElevatorState;
use crate::status::project_if_dirty;
use crate::traits::{InputSource, SwitchBank};

/// Inputs sampled once per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollInputs {
    /// Button pressed since the previous cycle
    pub button: Option<ButtonId>,
    /// Serial byte received since the previous cycle
    pub serial: Option<u8>,
    /// Destination switch bank (S1:S0)
    pub destination_bits: u8,
    /// Rate switch (S2)
    pub fast: bool,
}

impl PollInputs {
    /// Read one button event, one serial byte and the switches
    pub fn sample<I, S>(input: &mut I, switches: &mut S) -> Self
    where
        I: InputSource + ?Sized,
        S: SwitchBank + ?Sized,
    {
        Self {
            button: input.take_button(),
            serial: input.take_serial_byte(),
            destination_bits: switches.destination_bits(),
            fast: switches.fast_selected(),
        }
    }

    fn serial_event(&self) -> Option<InputEvent> {
        self.serial.map(InputEvent::from_serial_byte)
    }
}

/// Elevator controller
///
/// Owns all mutable elevator state. Nothing here blocks; the caller polls
/// at least as often as the fast tick interval.
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControllerConfig,
    mode: Mode,
    state: ElevatorState,
    motion: MotionEngine,
    door: DoorAnimation,
    tone: ToneTimer,
    splash: SplashAnimation,
    diagnostics: InputDiagnostics,
}

impl Controller {
    /// Controller in splash mode
    pub fn new(config: ControllerConfig, now_ms: u32) -> Self {
        Self {
            mode: Mode::Splash,
            state: ElevatorState::new(config.slow_tick_ms),
            motion: MotionEngine::new(now_ms),
            door: DoorAnimation::new(&config.door),
            tone: ToneTimer::new(),
            splash: SplashAnimation::new(config.splash),
            diagnostics: InputDiagnostics::new(),
            config,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &InputDiagnostics {
        &self.diagnostics
    }

    /// Run one cycle at `now_ms`
    pub fn poll(&mut self, now_ms: u32, inputs: &PollInputs) -> Outputs {
        let mut outputs = Outputs::default();

        let serial = inputs.serial_event();
        if let Some(InputEvent::Unrecognized(byte)) = serial {
            self.diagnostics.record_unrecognized(byte);
            outputs.unrecognized = Some(byte);
        }

        match self.mode {
            Mode::Splash => self.poll_splash(now_ms, inputs, serial, &mut outputs),
            Mode::Running => self.poll_running(now_ms, inputs, serial, &mut outputs),
        }

        outputs
    }

    fn poll_splash(
        &mut self,
        now_ms: u32,
        inputs: &PollInputs,
        serial: Option<InputEvent>,
        outputs: &mut Outputs,
    ) {
        let next = inputs
            .button
            .map(InputEvent::Button)
            .into_iter()
            .chain(serial)
            .fold(self.mode, Mode::transition);

        if !next.is_running() {
            outputs.splash_frame = self.splash.poll(now_ms);
            return;
        }

        self.mode = next;
        self.state = ElevatorState::new(self.config.tick_interval(inputs.fast));
        self.motion.restart(now_ms);
        self.door.invalidate();

        outputs.entered_run = true;
        outputs.status = project_if_dirty(&mut self.state);
        outputs.door = self.door.poll(now_ms);
    }

    fn poll_running(
        &mut self,
        now_ms: u32,
        inputs: &PollInputs,
        serial: Option<InputEvent>,
        outputs: &mut Outputs,
    ) {
        self.state
            .cabin
            .set_speed_ms(self.config.tick_interval(inputs.fast));

        if let Some(step) = self.motion.advance(&mut self.state, now_ms) {
            if let Some(transfer) = step.transfer {
                self.door.trigger(now_ms);
                outputs.tone = Some(self.tone.play(now_ms, self.config.arrival_tone));
                outputs.transfer = Some(transfer);
            }
        }

        outputs.status = project_if_dirty(&mut self.state);

        let command = match serial {
            Some(InputEvent::Serial(command)) => Some(command),
            _ => None,
        };
        let call = select_call(inputs.button, command);
        let drop_floor = Floor::from_switch_bits(inputs.destination_bits);
        outputs.intake = intake(&mut self.state, drop_floor, call);
        self.diagnostics.record_intake(&outputs.intake);

        if let IntakeOutcome::Accepted { .. } = outputs.intake {
            outputs.tone = Some(self.tone.play(now_ms, self.config.ack_tone));
        }

        outputs.door = self.door.poll(now_ms);
        if outputs.tone.is_none() {
            outputs.tone = self.tone.poll(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Transfer;
    use crate::feedback::{DoorPattern, SplashFrame, ToneCommand};
    use crate::floor::Position;
    use crate::state::{Direction, TravellerRequest};

    const SLOW: u32 = 200;

    fn running(now_ms: u32) -> Controller {
        let mut controller = Controller::new(ControllerConfig::default(), now_ms);
        let outputs = controller.poll(
            now_ms,
            &PollInputs {
                serial: Some(b's'),
                ..Default::default()
            },
        );
        assert!(outputs.entered_run);
        controller
    }

    fn idle(destination_bits: u8) -> PollInputs {
        PollInputs {
            destination_bits,
            ..Default::default()
        }
    }

    fn press(button: ButtonId, destination_bits: u8) -> PollInputs {
        PollInputs {
            button: Some(button),
            destination_bits,
            ..Default::default()
        }
    }

    #[test]
    fn test_splash_frames_until_start() {
        let mut controller = Controller::new(ControllerConfig::default(), 0);
        let outputs = controller.poll(0, &idle(0));
        assert_eq!(outputs.splash_frame, Some(SplashFrame(0)));
        assert_eq!(outputs.status, None);

        // Digits do not leave the splash
        let outputs = controller.poll(
            10,
            &PollInputs {
                serial: Some(b'2'),
                ..Default::default()
            },
        );
        assert_eq!(controller.mode(), Mode::Splash);
        assert_eq!(outputs.intake, IntakeOutcome::NoCall);
    }

    #[test]
    fn test_button_leaves_splash_without_calling() {
        let mut controller = Controller::new(ControllerConfig::default(), 0);
        let outputs = controller.poll(5, &press(ButtonId::B3, 0));
        assert!(outputs.entered_run);
        assert_eq!(controller.mode(), Mode::Running);
        assert_eq!(outputs.door, Some(DoorPattern::CLOSED));
        let record = outputs.status.unwrap();
        assert_eq!(record.displayed_floor, Floor::Ground);
        assert_eq!(controller.state().request, TravellerRequest::Empty);
    }

    #[test]
    fn test_unrecognized_counted() {
        let mut controller = running(0);
        let outputs = controller.poll(
            1,
            &PollInputs {
                serial: Some(b'x'),
                ..Default::default()
            },
        );
        assert_eq!(outputs.unrecognized, Some(b'x'));
        assert_eq!(controller.diagnostics().unrecognized_bytes(), 1);
    }

    #[test]
    fn test_pickup_and_drop_off_scenario() {
        let mut controller = running(0);

        let outputs = controller.poll(1, &press(ButtonId::B1, 2));
        assert_eq!(
            outputs.intake,
            IntakeOutcome::Accepted {
                pickup: Floor::First,
                destination: Floor::Second
            }
        );
        assert_eq!(outputs.tone, Some(ToneCommand::Start(2000)));
        assert!(controller.state().request.is_present());

        let mut transfers = [None; 2];
        let mut seen = 0;
        let mut now = 1;
        while now < 2000 {
            now += 10;
            let outputs = controller.poll(now, &idle(2));
            if let Some(transfer) = outputs.transfer {
                transfers[seen] = Some((now, transfer));
                seen += 1;
                assert_eq!(outputs.tone, Some(ToneCommand::Start(1000)));
            }
        }

        assert_eq!(seen, 2);
        let (picked_at, picked) = transfers[0].unwrap();
        assert_eq!(
            picked,
            Transfer::PickedUp {
                floor: Floor::First,
                destination: Floor::Second
            }
        );
        assert_eq!(picked_at, 4 * SLOW + 1);
        let (_, dropped) = transfers[1].unwrap();
        assert_eq!(dropped, Transfer::DroppedOff { floor: Floor::Second });

        let state = controller.state();
        assert_eq!(state.cabin.position(), Floor::Second.position());
        assert_eq!(state.request, TravellerRequest::Empty);
        assert_eq!(state.counters.with_traveller(), 1);
        assert_eq!(state.counters.without_traveller(), 1);
    }

    #[test]
    fn test_present_until_pickup_floor() {
        let mut controller = running(0);
        controller.poll(1, &press(ButtonId::B1, 2));

        for tick in 1..4 {
            controller.poll(tick * SLOW + 1, &idle(2));
            assert!(controller.state().request.is_present());
            assert_eq!(controller.state().cabin.position().row(), tick as u8);
        }
        controller.poll(4 * SLOW + 1, &idle(2));
        assert!(controller.state().request.is_onboard());
        assert_eq!(controller.state().cabin.destination(), Floor::Second);
    }

    #[test]
    fn test_same_floor_no_change_no_tone() {
        let mut controller = running(0);
        let before = controller.state().clone();
        let outputs = controller.poll(1, &press(ButtonId::B2, 2));
        assert!(matches!(outputs.intake, IntakeOutcome::SameFloor(_)));
        assert_eq!(outputs.tone, None);
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.diagnostics().same_floor_rejections(), 1);
    }

    #[test]
    fn test_button_beats_serial() {
        let mut controller = running(0);
        let outputs = controller.poll(
            1,
            &PollInputs {
                button: Some(ButtonId::B1),
                serial: Some(b'3'),
                destination_bits: 0,
                fast: false,
            },
        );
        assert_eq!(
            outputs.intake,
            IntakeOutcome::Accepted {
                pickup: Floor::First,
                destination: Floor::Ground
            }
        );
    }

    #[test]
    fn test_serial_call() {
        let mut controller = running(0);
        let outputs = controller.poll(
            1,
            &PollInputs {
                serial: Some(b'3'),
                destination_bits: 1,
                ..Default::default()
            },
        );
        assert_eq!(
            outputs.intake,
            IntakeOutcome::Accepted {
                pickup: Floor::Third,
                destination: Floor::First
            }
        );
    }

    #[test]
    fn test_busy_input_is_discarded() {
        let mut controller = running(0);
        controller.poll(1, &press(ButtonId::B3, 0));
        let outputs = controller.poll(2, &press(ButtonId::B1, 2));
        assert!(matches!(outputs.intake, IntakeOutcome::Busy(_)));
        assert_eq!(
            controller.state().request,
            TravellerRequest::Waiting {
                pickup: Floor::Third,
                destination: Floor::Ground
            }
        );
        assert_eq!(controller.diagnostics().busy_rejections(), 1);
    }

    #[test]
    fn test_switch_sampled_at_acceptance() {
        let mut controller = running(0);
        controller.poll(1, &press(ButtonId::B1, 3));
        for tick in 1..=4 {
            controller.poll(tick * SLOW + 1, &idle(0));
        }
        assert_eq!(
            controller.state().request,
            TravellerRequest::Onboard {
                destination: Floor::Third
            }
        );
    }

    #[test]
    fn test_fast_rate() {
        let mut controller = running(0);
        let fast = PollInputs {
            button: Some(ButtonId::B1),
            destination_bits: 0,
            fast: true,
            serial: None,
        };
        controller.poll(1, &fast);
        controller.poll(100, &PollInputs { button: None, ..fast });
        assert_eq!(controller.state().cabin.position().row(), 1);
        assert_eq!(controller.state().cabin.speed_ms(), 100);
    }

    #[test]
    fn test_ack_tone_stops() {
        let mut controller = running(0);
        controller.poll(1, &press(ButtonId::B1, 2));
        assert_eq!(controller.poll(50, &idle(2)).tone, None);
        assert_eq!(controller.poll(51, &idle(2)).tone, Some(ToneCommand::Stop));
    }

    #[test]
    fn test_door_cycle_after_pickup() {
        let mut controller = running(0);
        // Pickup at the current floor happens on the next tick
        controller.poll(1, &press(ButtonId::B0, 1));
        let outputs = controller.poll(SLOW, &idle(1));
        assert_eq!(
            outputs.transfer,
            Some(Transfer::PickedUp {
                floor: Floor::Ground,
                destination: Floor::First
            })
        );
        assert_eq!(outputs.door, None);

        let outputs = controller.poll(SLOW + 300, &idle(1));
        assert_eq!(outputs.door, Some(DoorPattern::OPEN));
        let outputs = controller.poll(SLOW + 1300, &idle(1));
        assert_eq!(outputs.door, Some(DoorPattern::CLOSED));
    }

    #[test]
    fn test_status_projected_on_change_only() {
        let mut controller = running(0);
        assert_eq!(controller.poll(1, &idle(0)).status, None);
        assert_eq!(controller.poll(SLOW, &idle(0)).status, None);

        controller.poll(SLOW + 1, &press(ButtonId::B2, 0));
        let record = controller.poll(SLOW + 2, &idle(0)).status.unwrap();
        assert!(record.traveller.is_some());
        let record = controller.poll(2 * SLOW + 1, &idle(0)).status.unwrap();
        assert_eq!(record.direction, Direction::Up);
        assert!(record.between_floors);
    }

    // Random input sequences against the controller invariants
    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        struct Cycle {
            dt: u32,
            button: Option<u8>,
            serial: Option<u8>,
            bits: u8,
            fast: bool,
        }

        fn cycle() -> impl Strategy<Value = Cycle> {
            (
                0u32..250,
                proptest::option::weighted(0.1, 0u8..4),
                proptest::option::weighted(0.1, prop_oneof![b'0'..=b'3', Just(b's'), any::<u8>()]),
                0u8..4,
                any::<bool>(),
            )
                .prop_map(|(dt, button, serial, bits, fast)| Cycle {
                    dt,
                    button,
                    serial,
                    bits,
                    fast,
                })
        }

        proptest! {
            #[test]
            fn prop_controller_invariants(cycles in proptest::collection::vec(cycle(), 1..400)) {
                let mut controller = running(0);
                let mut now = 0u32;
                let mut crossings = 0u32;

                for c in cycles {
                    now = now.wrapping_add(c.dt);
                    let before = controller.state().clone();
                    let inputs = PollInputs {
                        button: c.button.and_then(|code| ButtonId::from_code(code + 1)),
                        serial: c.serial,
                        destination_bits: c.bits,
                        fast: c.fast,
                    };
                    let outputs = controller.poll(now, &inputs);
                    let after = controller.state();

                    // At most one row per cycle
                    let (a, b) = (before.cabin.position().row(), after.cabin.position().row());
                    prop_assert!(a.abs_diff(b) <= 1);

                    // Floor latches only on aligned rows
                    if after.cabin.position().is_floor_aligned() {
                        prop_assert_eq!(Some(after.cabin.floor()), after.cabin.position().floor());
                    } else {
                        prop_assert_eq!(after.cabin.floor(), before.cabin.floor());
                    }

                    // No second request while one is active; a drop-off
                    // this cycle frees the cabin before intake runs
                    let dropped = matches!(outputs.transfer, Some(Transfer::DroppedOff { .. }));
                    if before.request.is_active() && !dropped {
                        let accepted = matches!(outputs.intake, IntakeOutcome::Accepted { .. });
                        prop_assert!(!accepted);
                    }

                    // Counters only grow, once per floor arrival
                    prop_assert!(after.counters.with_traveller() >= before.counters.with_traveller());
                    prop_assert!(after.counters.without_traveller() >= before.counters.without_traveller());
                    if a != b && after.cabin.position().is_floor_aligned() {
                        crossings += 1;
                    }
                    prop_assert_eq!(after.counters.total(), crossings);

                    prop_assert!(after.cabin.position() <= Floor::Third.position());
                    prop_assert!(!(after.request.is_present() && after.request.is_onboard()));
                }
            }

            #[test]
            fn prop_stalled_loop_single_step(gap in 0u32..100_000) {
                let mut controller = running(0);
                controller.poll(1, &press(ButtonId::B3, 0));
                controller.poll(1u32.wrapping_add(gap), &idle(0));
                prop_assert!(controller.state().cabin.position() <= Position::new(1).unwrap());
            }
        }
    }
}
