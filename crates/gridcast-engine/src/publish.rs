//! Delivery of finished grids to consumers.
//!
//! The generator hands each finished grid to a [`Publisher`] exactly once
//! and expects no acknowledgement. [`ChannelPublisher`] is the in-process
//! transport: a latched fan-out over crossbeam channels, so a subscriber
//! that joins late still receives the most recent grid.

use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};

use crate::grid::OccupancyGrid;

/// Sink for finished grids.
pub trait Publisher {
    /// Deliver one finished grid. Fire-and-forget.
    fn publish(&self, grid: Arc<OccupancyGrid>);
}

impl<B: Publisher + ?Sized> Publisher for &B {
    fn publish(&self, grid: Arc<OccupancyGrid>) {
        (**self).publish(grid)
    }
}

impl<B: Publisher + ?Sized> Publisher for Arc<B> {
    fn publish(&self, grid: Arc<OccupancyGrid>) {
        (**self).publish(grid)
    }
}

/// Discards every grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPublisher;

impl Publisher for NullPublisher {
    fn publish(&self, _grid: Arc<OccupancyGrid>) {}
}

// ── ChannelPublisher ───────────────────────────────────────────────

#[derive(Default)]
struct Latch {
    latest: Option<Arc<OccupancyGrid>>,
    subscribers: Vec<Sender<Arc<OccupancyGrid>>>,
    published: u64,
}

/// Latched fan-out publisher.
///
/// Every subscriber gets its own unbounded channel. New subscribers
/// immediately receive the latest grid, if any. Subscribers whose
/// receiver has been dropped are pruned on the next publication.
#[derive(Default)]
pub struct ChannelPublisher {
    latch: Mutex<Latch>,
}

impl ChannelPublisher {
    /// A publisher with no subscribers and nothing latched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new subscription.
    pub fn subscribe(&self) -> Receiver<Arc<OccupancyGrid>> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut latch = self.latch.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(latest) = &latch.latest {
            // The receiver is alive, so an unbounded send cannot fail.
            let _ = tx.send(Arc::clone(latest));
        }
        latch.subscribers.push(tx);
        rx
    }

    /// The most recently published grid.
    pub fn latest(&self) -> Option<Arc<OccupancyGrid>> {
        self.latch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .latest
            .clone()
    }

    /// Number of live subscriptions as of the last publication or
    /// subscription.
    pub fn subscriber_count(&self) -> usize {
        self.latch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }

    /// Total grids published so far.
    pub fn published(&self) -> u64 {
        self.latch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .published
    }
}

impl Publisher for ChannelPublisher {
    fn publish(&self, grid: Arc<OccupancyGrid>) {
        let mut latch = self.latch.lock().unwrap_or_else(PoisonError::into_inner);
        latch
            .subscribers
            .retain(|tx| tx.send(Arc::clone(&grid)).is_ok());
        latch.latest = Some(grid);
        latch.published += 1;
    }
}

impl std::fmt::Debug for ChannelPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelPublisher")
            .field("subscribers", &self.subscriber_count())
            .field("published", &self.published())
            .finish()
    }
}
