use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread;

use crate::core::{ContextMenu, Player, Surface};
use crate::dispatcher::{Dispatcher, Request};

/// Owns the menu and handles requests one at a time.
#[derive(Debug)]
pub struct Worker<P, S> {
    player: P,
    surface: S,
    menu: Option<ContextMenu>,
}

impl<P: Player, S: Surface> Worker<P, S> {
    /// Creates a worker. The menu is loaded on the first [`Request::Show`].
    pub fn new(player: P, surface: S) -> Self {
        Self {
            player,
            surface,
            menu: None,
        }
    }

    /// Returns the loaded menu, if any.
    #[must_use]
    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Returns the surface the menu is shown on.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles a single request.
    pub fn handle(&mut self, request: Request) -> ControlFlow<()> {
        match request {
            Request::Show(point) => {
                let menu = self
                    .menu
                    .get_or_insert_with(|| ContextMenu::load(&self.player));

                let _ = menu.show(&self.player, &mut self.surface, point);
            }
            Request::Select(id) => match &self.menu {
                Some(menu) => {
                    if !menu.select(&self.player, id) {
                        log::debug!("Menu item {} has no command", id.as_u32());
                    }
                }
                None => log::debug!("Ignoring selection before the menu was shown"),
            },
            Request::Reload => {
                self.menu = Some(ContextMenu::load(&self.player));
            }
            Request::Shutdown => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    /// Handles requests until [`Request::Shutdown`] or until every
    /// [`Dispatcher`] is dropped.
    pub fn run(mut self, receiver: mpsc::Receiver<Request>) {
        for request in receiver {
            log::trace!("Handling {request:?}");

            if self.handle(request).is_break() {
                break;
            }
        }

        log::debug!("Menu worker stopped");
    }
}

/// Starts a worker thread.
///
/// `init` runs on the new thread and creates the player handle and the
/// surface, so neither needs to be [`Send`].
pub fn spawn<P, S, F>(init: F) -> io::Result<(Dispatcher, thread::JoinHandle<()>)>
where
    P: Player,
    S: Surface,
    F: FnOnce() -> (P, S) + Send + 'static,
{
    let (dispatcher, receiver) = Dispatcher::channel();

    let handle = thread::Builder::new()
        .name("mpv-menu".to_owned())
        .spawn(move || {
            let (player, surface) = init();
            Worker::new(player, surface).run(receiver);
        })?;

    Ok((dispatcher, handle))
}
