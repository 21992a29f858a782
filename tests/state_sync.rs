mod support;

mod tests {
    use noise_node::{Publication, RadioRequest, RequestError, StateId, StateSync};

    use crate::support::MockBoard;

    #[test]
    fn test_set_then_get_returns_value() {
        let mut board = MockBoard::default();
        let mut states = StateSync::default();

        for id in [StateId::Relay, StateId::Led] {
            for value in [true, false, true] {
                states.set(&mut board, id, value);
                assert_eq!(states.get(&mut board, id), value);
            }
        }
    }

    #[test]
    fn test_set_drives_hardware_and_echoes() {
        let mut board = MockBoard::default();
        let mut states = StateSync::new(false);

        states.set(&mut board, StateId::Relay, true);
        states.set(&mut board, StateId::Led, true);

        assert!(board.relay.on);
        assert!(board.led.on);
        assert!(states.led());
        assert_eq!(
            board.radio.sent,
            [
                Publication::State {
                    id: StateId::Relay,
                    value: true
                },
                Publication::State {
                    id: StateId::Led,
                    value: true
                },
            ]
        );
    }

    #[test]
    fn test_relay_get_reads_driver() {
        let mut board = MockBoard::default();
        let states = StateSync::default();
        board.relay.on = true;

        assert!(states.get(&mut board, StateId::Relay));
        assert_eq!(
            board.radio.sent,
            [Publication::State {
                id: StateId::Relay,
                value: true
            }]
        );
    }

    #[test]
    fn test_get_does_not_mutate() {
        let mut board = MockBoard::default();
        let states = StateSync::new(true);

        assert!(states.get(&mut board, StateId::Led));
        assert!(!board.led.on);
        assert!(states.led());
    }

    #[test]
    fn test_brightness_is_not_echoed() {
        let mut board = MockBoard::default();
        let mut states = StateSync::default();

        states
            .handle(&mut board, RadioRequest::SetBrightness(42))
            .unwrap();
        assert_eq!(board.strip.brightness, Some(42));
        assert!(board.radio.sent.is_empty());
    }

    #[test]
    fn test_unknown_state_is_ignored() {
        let mut board = MockBoard::default();
        let mut states = StateSync::default();

        assert_eq!(
            states.handle(&mut board, RadioRequest::SetState(9, true)),
            Err(RequestError::UnknownState(9))
        );
        assert_eq!(
            states.handle(&mut board, RadioRequest::GetState(200)),
            Err(RequestError::UnknownState(200))
        );
        assert!(!board.relay.on);
        assert!(!board.led.on);
        assert!(board.radio.sent.is_empty());
    }

    #[test]
    fn test_raw_ids() {
        assert_eq!(StateId::from_raw(0), Some(StateId::Relay));
        assert_eq!(StateId::from_raw(1), Some(StateId::Led));
        assert_eq!(StateId::try_from(2), Err(RequestError::UnknownState(2)));
        assert_eq!(StateId::Led.as_str(), "led");
    }
}
