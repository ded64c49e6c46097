pub(crate) mod idea;
pub(crate) mod tags;
