mod common;

#[cfg(test)]
pub mod sse_tests {
    use sabq::services::{ConnEffect, ConnEvent, ConnState, Reconnector, RECONNECT_DELAY};

    #[test]
    fn test_mount_opens_exactly_one_stream() {
        let mut machine = Reconnector::new();

        assert_eq!(machine.handle(ConnEvent::Mount), vec![ConnEffect::OpenStream]);
        assert_eq!(machine.state(), ConnState::Connecting);

        // A second mount while a stream is pending changes nothing.
        assert!(machine.handle(ConnEvent::Mount).is_empty());
        assert_eq!(machine.state(), ConnState::Connecting);
    }

    #[test]
    fn test_open_then_fail_schedules_single_retry() {
        let mut machine = Reconnector::new();
        machine.handle(ConnEvent::Mount);
        machine.handle(ConnEvent::Opened);
        assert_eq!(machine.state(), ConnState::Connected);

        let effects = machine.handle(ConnEvent::Failed);
        assert_eq!(
            effects,
            vec![
                ConnEffect::CloseStream,
                ConnEffect::ScheduleRetry(RECONNECT_DELAY),
            ]
        );
        assert_eq!(machine.state(), ConnState::Backoff);
    }

    #[test]
    fn test_repeated_failures_in_backoff_add_no_timers() {
        let mut machine = Reconnector::new();
        machine.handle(ConnEvent::Mount);
        machine.handle(ConnEvent::Failed);
        assert_eq!(machine.state(), ConnState::Backoff);

        // Error bursts while already backing off are absorbed.
        assert!(machine.handle(ConnEvent::Failed).is_empty());
        assert!(machine.handle(ConnEvent::Failed).is_empty());
        assert_eq!(machine.state(), ConnState::Backoff);
    }

    #[test]
    fn test_retry_due_reopens_once() {
        let mut machine = Reconnector::new();
        machine.handle(ConnEvent::Mount);
        machine.handle(ConnEvent::Failed);

        assert_eq!(
            machine.handle(ConnEvent::RetryDue),
            vec![ConnEffect::OpenStream]
        );
        assert_eq!(machine.state(), ConnState::Connecting);

        // A stale timer firing after the reconnect is ignored.
        assert!(machine.handle(ConnEvent::RetryDue).is_empty());
    }

    #[test]
    fn test_unmount_closes_and_silences_the_machine() {
        let mut machine = Reconnector::new();
        machine.handle(ConnEvent::Mount);
        machine.handle(ConnEvent::Opened);

        assert_eq!(
            machine.handle(ConnEvent::Unmount),
            vec![ConnEffect::CloseStream]
        );
        assert_eq!(machine.state(), ConnState::Disconnected);

        // Late events from torn-down callbacks do nothing.
        assert!(machine.handle(ConnEvent::Failed).is_empty());
        assert!(machine.handle(ConnEvent::RetryDue).is_empty());
        assert!(machine.handle(ConnEvent::Opened).is_empty());
        assert_eq!(machine.state(), ConnState::Disconnected);
    }

    #[test]
    fn test_unmount_during_backoff_cancels_reconnect_cycle() {
        let mut machine = Reconnector::new();
        machine.handle(ConnEvent::Mount);
        machine.handle(ConnEvent::Failed);

        machine.handle(ConnEvent::Unmount);
        assert_eq!(machine.state(), ConnState::Disconnected);

        // The already-scheduled timer fires into a disconnected machine.
        assert!(machine.handle(ConnEvent::RetryDue).is_empty());
        assert_eq!(machine.state(), ConnState::Disconnected);
    }

    #[test]
    fn test_full_reconnect_cycle_keeps_stream_count_at_one() {
        let mut machine = Reconnector::new();
        let mut open_streams: i32 = 0;

        let events = [
            ConnEvent::Mount,
            ConnEvent::Opened,
            ConnEvent::Failed,
            ConnEvent::RetryDue,
            ConnEvent::Failed,
            ConnEvent::RetryDue,
            ConnEvent::Opened,
            ConnEvent::Unmount,
        ];
        for event in events {
            for effect in machine.handle(event) {
                match effect {
                    ConnEffect::OpenStream => open_streams += 1,
                    ConnEffect::CloseStream => open_streams = (open_streams - 1).max(0),
                    ConnEffect::ScheduleRetry(_) => {}
                }
                assert!(open_streams <= 1, "more than one stream open at once");
            }
        }
        assert_eq!(open_streams, 0);
    }
}
