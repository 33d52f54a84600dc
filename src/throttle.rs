//! Trailing-edge throttle for status streams
//!
//! The first value to arrive opens a window of `period`. Values arriving
//! inside the window overwrite each other; when the window elapses the most
//! recent one is forwarded. At most one value leaves per window, and the last
//! value before the upstream ends is still delivered once its window closes.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{sleep, Sleep};

pub struct ThrottleLatest<S: Stream> {
    inner: S,
    period: Duration,
    pending: Option<S::Item>,
    window: Option<Pin<Box<Sleep>>>,
    upstream_done: bool,
}

// `pending` is never pinned; only `inner` is polled through a pin
impl<S: Stream + Unpin> Unpin for ThrottleLatest<S> {}

impl<S: Stream + Unpin> ThrottleLatest<S> {
    pub fn new(inner: S, period: Duration) -> Self {
        Self {
            inner,
            period,
            pending: None,
            window: None,
            upstream_done: false,
        }
    }
}

/// Wrap `stream` so it yields at most one (the latest) value per `period`
pub fn throttle_latest<S: Stream + Unpin>(stream: S, period: Duration) -> ThrottleLatest<S> {
    ThrottleLatest::new(stream, period)
}

impl<S: Stream + Unpin> Stream for ThrottleLatest<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        while !this.upstream_done {
            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    this.pending = Some(item);
                    if this.window.is_none() {
                        this.window = Some(Box::pin(sleep(this.period)));
                    }
                }
                Poll::Ready(None) => this.upstream_done = true,
                Poll::Pending => break,
            }
        }

        if let Some(window) = this.window.as_mut() {
            if window.as_mut().poll(cx).is_pending() {
                return Poll::Pending;
            }
            this.window = None;
            if let Some(item) = this.pending.take() {
                return Poll::Ready(Some(item));
            }
        }

        if this.upstream_done {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream::{self, StreamExt};
    use tokio::time::Instant;

    const WINDOW: Duration = Duration::from_millis(200);

    fn spaced(items: Vec<(u64, u32)>) -> impl Stream<Item = u32> + Unpin {
        Box::pin(stream::iter(items).then(|(delay_ms, value)| async move {
            sleep(Duration::from_millis(delay_ms)).await;
            value
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_latest() {
        let out: Vec<u32> = throttle_latest(stream::iter(vec![1, 2, 3, 4, 5]), WINDOW)
            .collect()
            .await;
        assert_eq!(out, vec![5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forwards_on_trailing_edge() {
        let start = Instant::now();
        let mut throttled = throttle_latest(spaced(vec![(0, 1), (50, 2), (50, 3), (200, 4)]), WINDOW);

        assert_eq!(throttled.next().await, Some(3));
        let first = start.elapsed();
        assert!(first >= WINDOW && first < Duration::from_millis(300));

        // 4 arrives at 300ms and opens a fresh window
        assert_eq!(throttled.next().await, Some(4));
        assert!(start.elapsed() >= Duration::from_millis(500));

        assert_eq!(throttled.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_stream_ends_immediately() {
        let mut throttled = throttle_latest(stream::iter(Vec::<u32>::new()), WINDOW);
        assert_eq!(throttled.next().await, None);
    }
}
