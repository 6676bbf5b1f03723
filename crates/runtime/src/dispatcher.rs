use std::sync::mpsc;

use crate::core::{MenuId, Point};

/// A unit of work for the plugin worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Show the menu at a point in screen coordinates.
    Show(Point),
    /// Dispatch the command of a chosen item.
    Select(MenuId),
    /// Re-read the menu definition.
    Reload,
    /// Stop the worker.
    Shutdown,
}

/// An error returned when posting a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The worker has exited.
    #[error("the menu worker is no longer running")]
    Disconnected,
}

/// A cloneable handle posting requests to the worker.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: mpsc::Sender<Request>,
}

impl Dispatcher {
    /// Creates a dispatcher and the receiving end a [`Worker`] runs on.
    ///
    /// [`Worker`]: crate::Worker
    #[must_use]
    pub fn channel() -> (Self, mpsc::Receiver<Request>) {
        let (sender, receiver) = mpsc::channel();

        (Self { sender }, receiver)
    }

    /// Queues a request.
    pub fn send(&self, request: Request) -> Result<(), Error> {
        self.sender
            .send(request)
            .map_err(|_| Error::Disconnected)
    }

    /// Queues a [`Request::Show`].
    pub fn show(&self, point: Point) -> Result<(), Error> {
        self.send(Request::Show(point))
    }

    /// Queues a [`Request::Select`].
    pub fn select(&self, id: MenuId) -> Result<(), Error> {
        self.send(Request::Select(id))
    }

    /// Queues a [`Request::Reload`].
    pub fn reload(&self) -> Result<(), Error> {
        self.send(Request::Reload)
    }

    /// Queues a [`Request::Shutdown`].
    pub fn shutdown(&self) -> Result<(), Error> {
        self.send(Request::Shutdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_arrive_in_order() {
        let (dispatcher, receiver) = Dispatcher::channel();
        let other = dispatcher.clone();

        dispatcher.show(Point::new(1, 2)).unwrap();
        other.select(MenuId(1124)).unwrap();
        dispatcher.reload().unwrap();

        let received: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            received,
            [
                Request::Show(Point::new(1, 2)),
                Request::Select(MenuId(1124)),
                Request::Reload,
            ]
        );
    }

    #[test]
    fn test_send_after_worker_exit() {
        let (dispatcher, receiver) = Dispatcher::channel();
        drop(receiver);

        assert_eq!(dispatcher.shutdown(), Err(Error::Disconnected));
    }
}
