mod tests {
    use noise_node::{ButtonEvent, EventQueue, NodeEvent, QueueFull, RadioRequest};

    #[test]
    fn test_events_come_out_in_order() {
        let queue: EventQueue<4> = EventQueue::new();
        let poster = queue.poster();

        poster.adc_conversion(100).unwrap();
        poster.button(ButtonEvent::Press).unwrap();
        poster.radio(RadioRequest::GetState(0)).unwrap();
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop(), Some(NodeEvent::AdcConversion(100)));
        assert_eq!(queue.pop(), Some(NodeEvent::Button(ButtonEvent::Press)));
        assert_eq!(
            queue.pop(),
            Some(NodeEvent::Radio(RadioRequest::GetState(0)))
        );
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_returns_event() {
        let queue: EventQueue<1> = EventQueue::new();
        queue.post(NodeEvent::TemperatureUpdate).unwrap();

        let err = queue.poster().adc_conversion(7);
        assert_eq!(err, Err(QueueFull(NodeEvent::AdcConversion(7))));
        assert_eq!(queue.pop(), Some(NodeEvent::TemperatureUpdate));
    }
}
