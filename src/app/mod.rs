//! Headless app shell: reducer-style state updates + side-effect commands.
//!
//! User intents and async completions flow through [`FeedApp::dispatch`];
//! the reducer applies pure state transitions and returns commands, which
//! the runtime executes against the store as spawned tasks. Completions
//! come back over a channel and are drained by [`FeedApp::poll_messages`],
//! so application logic interleaves on one logical thread.

mod action;
mod command;
mod reducer;
mod runtime;
mod state;


pub use action::{Action, AsyncAction, FeedAction, OverlayAction};
pub use command::{Command, FeedRefreshReason};
pub use state::{AppState, Overlay, PostDraft};

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::application::feed::FeedSynchronizer;
use crate::infra::session::SessionProvider;

/// The feed engine: state, injected capabilities, and the action loop.
pub struct FeedApp {
    pub state: AppState,
    pub(crate) synchronizer: Arc<FeedSynchronizer>,
    pub(crate) session: Arc<dyn SessionProvider>,
    pub(crate) handle: tokio::runtime::Handle,
    pub(crate) tx: UnboundedSender<AsyncAction>,
    rx: UnboundedReceiver<AsyncAction>,
}

impl FeedApp {
    pub fn new(synchronizer: Arc<FeedSynchronizer>, session: Arc<dyn SessionProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = AppState {
            current_user: session.current_user().map(|user| user.id),
            ..Default::default()
        };
        Self {
            state,
            synchronizer,
            session,
            handle: tokio::runtime::Handle::try_current()
                .unwrap_or_else(|_| crate::runtime_handle()),
            tx,
            rx,
        }
    }

    /// Dispatch one action: reduce, then execute the resulting commands.
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }

    /// Kick off the initial load.
    pub fn start(&mut self) {
        self.state.is_loading = true;
        runtime::run(
            self,
            Command::LoadFeed {
                reason: FeedRefreshReason::Initial,
            },
        );
    }

    /// Drain completions from spawned store calls, dispatching each as an
    /// async action. Returns true if any state update was applied.
    pub fn poll_messages(&mut self) -> bool {
        let mut updated = false;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(Action::Async(action));
            updated = true;
        }
        updated
    }
}
