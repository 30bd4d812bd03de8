pub mod dispatch;
pub mod set_team;
