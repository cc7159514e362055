use langton_core::prelude::RuleId;

macro_rules! impl_command_from {
    ( Command::$command_variant:ident($inner:ty) ) => {
        impl From<$inner> for Command {
            fn from(c: $inner) -> Self {
                Self::$command_variant(c)
            }
        }
    };
}

#[derive(Debug, Clone)]
pub enum Command {
    Sim(SimCommand),
    Highway(HighwayCommand),

    SetRule(RuleId),
    /// Clears the grid and returns the ant to the center.
    Reset,
}

#[derive(Debug, Clone)]
pub enum SimCommand {
    /// Takes some number of steps immediately, without pacing.
    Step(u64),

    StartRunning,
}
impl_command_from!(Command::Sim(SimCommand));

#[derive(Debug, Copy, Clone)]
pub enum HighwayCommand {
    /// Keeps running (and looking for highways) after one was detected.
    Continue,
}
impl_command_from!(Command::Highway(HighwayCommand));
