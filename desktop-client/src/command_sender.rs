use common::games::snake::{Direction, SessionCommand};
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, cmd: SessionCommand) {
        let _ = self.tx.send(cmd);
    }

    pub fn turn(&self, direction: Direction) {
        self.send(SessionCommand::Turn(direction));
    }
}
