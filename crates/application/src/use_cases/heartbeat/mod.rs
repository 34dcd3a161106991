mod send;

pub use send::SendHeartbeatUseCase;
