use futures::{Stream, StreamExt};
use tracing::warn;

use super::item::StreamItem;
use crate::domain::Record;
use crate::io::SourceError;

/// Push-based consumer of a single source
///
/// A producer calls `on_next` zero or more times, then exactly one of
/// `on_error` or `on_complete`, and nothing after that.
pub trait Observer<T> {
    /// Receive one parsed item
    fn on_next(&mut self, item: T);

    /// Source failed to open; no items were or will be delivered
    fn on_error(&mut self, error: SourceError);

    /// Source reached end of input
    fn on_complete(&mut self);
}

/// Drive an observer from a single-source item stream
///
/// Stops at the first terminal item. If the stream ends without one, the
/// observer receives no terminal call.
pub async fn observe<S, O>(mut stream: S, observer: &mut O)
where
    S: Stream<Item = StreamItem> + Unpin,
    O: Observer<Record> + ?Sized,
{
    while let Some(item) = stream.next().await {
        match item {
            StreamItem::Navaid(navaid) => observer.on_next(Record::Navaid(navaid)),
            StreamItem::Airport(airport) => observer.on_next(Record::Airport(airport)),
            StreamItem::Runway(runway) => observer.on_next(Record::Runway(runway)),
            StreamItem::Error(e) => {
                observer.on_error(e);
                return;
            }
            StreamItem::Terminator => {
                observer.on_complete();
                return;
            }
        }
    }

    warn!("Item stream closed before its source terminated");
}
