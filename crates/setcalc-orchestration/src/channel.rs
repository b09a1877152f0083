//! Single-value result channels.
//!
//! A `ResultChannel` connects one task to one collector. It is backed by a
//! `crossbeam_channel::bounded(1)` pair so the task's single send completes
//! immediately whether or not the collector is already waiting.
//!
//! The channel keeps its own `Sender` until `close` is called. Producers are
//! clones of it, consumed by `ResultProducer::send`, so the channel only
//! reports disconnection to the consumer once the owner has closed it and
//! the producer has sent or been dropped.

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;

use setcalc_core::ResultValue;

/// A single-producer, single-consumer conduit for one task result.
#[derive(Debug)]
pub struct ResultChannel {
    sender: Mutex<Option<Sender<ResultValue>>>,
    receiver: Receiver<ResultValue>,
}

impl ResultChannel {
    /// Create an open, empty channel.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = bounded(1);
        Self {
            sender: Mutex::new(Some(tx)),
            receiver: rx,
        }
    }

    /// Hand out the producing end. Returns `None` once the channel is
    /// closed.
    #[must_use]
    pub fn producer(&self) -> Option<ResultProducer> {
        self.sender
            .lock()
            .as_ref()
            .map(|tx| ResultProducer { tx: tx.clone() })
    }

    /// Hand out the consuming end.
    #[must_use]
    pub fn consumer(&self) -> ResultConsumer {
        ResultConsumer {
            rx: self.receiver.clone(),
        }
    }

    /// Close the channel. Returns `true` if this call closed it, `false` if
    /// it was already closed.
    pub fn close(&self) -> bool {
        self.sender.lock().take().is_some()
    }

    /// Whether `close` has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// Number of values sent but not yet received (0 or 1).
    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl Default for ResultChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Producing end of a `ResultChannel`; sends exactly once.
#[derive(Debug)]
pub struct ResultProducer {
    tx: Sender<ResultValue>,
}

impl ResultProducer {
    /// Send the task's result, consuming the producer.
    ///
    /// Returns `false` if every consumer is gone and the value was dropped.
    pub fn send(self, value: ResultValue) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Consuming end of a `ResultChannel`.
#[derive(Debug, Clone)]
pub struct ResultConsumer {
    rx: Receiver<ResultValue>,
}

impl ResultConsumer {
    /// Block until a value arrives or the channel is closed and empty.
    #[must_use]
    pub fn recv(&self) -> Option<ResultValue> {
        self.rx.recv().ok()
    }

    /// Drain values until the channel is closed and empty.
    pub fn iter(&self) -> impl Iterator<Item = ResultValue> + '_ {
        self.rx.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn send_does_not_block_without_receiver_waiting() {
        let channel = ResultChannel::new();
        let producer = channel.producer().unwrap();
        assert!(producer.send(ResultValue::Boolean(true)));
        assert_eq!(channel.pending(), 1);
    }

    #[test]
    fn value_survives_close() {
        let channel = ResultChannel::new();
        let consumer = channel.consumer();
        channel
            .producer()
            .unwrap()
            .send(ResultValue::Float(2.0));
        assert!(channel.close());
        assert_eq!(consumer.recv(), Some(ResultValue::Float(2.0)));
        assert_eq!(consumer.recv(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let channel = ResultChannel::new();
        assert!(!channel.is_closed());
        assert!(channel.close());
        assert!(!channel.close());
        assert!(channel.is_closed());
        assert!(channel.producer().is_none());
    }

    #[test]
    fn consumer_blocks_until_closed() {
        let channel = ResultChannel::new();
        let consumer = channel.consumer();
        let drain = thread::spawn(move || consumer.iter().collect::<Vec<_>>());

        thread::sleep(Duration::from_millis(20));
        assert!(!drain.is_finished());

        channel
            .producer()
            .unwrap()
            .send(ResultValue::Sequence(vec![1, 4]));
        channel.close();
        let drained = drain.join().unwrap();
        assert_eq!(drained, vec![ResultValue::Sequence(vec![1, 4])]);
    }

    #[test]
    fn outstanding_producer_keeps_channel_open() {
        let channel = ResultChannel::new();
        let consumer = channel.consumer();
        let producer = channel.producer().unwrap();
        channel.close();

        let drain = thread::spawn(move || consumer.recv());
        thread::sleep(Duration::from_millis(20));
        assert!(!drain.is_finished());

        producer.send(ResultValue::Boolean(false));
        assert_eq!(drain.join().unwrap(), Some(ResultValue::Boolean(false)));
    }

    #[test]
    fn dropped_producer_ends_drain_without_value() {
        let channel = ResultChannel::new();
        let consumer = channel.consumer();
        drop(channel.producer());
        channel.close();
        assert_eq!(consumer.recv(), None);
    }
}
