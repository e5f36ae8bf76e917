use crate::state::AnimationPhase;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("animation phase cannot move from {from:?} to {to:?}")]
    PhaseOrder {
        from: AnimationPhase,
        to: AnimationPhase,
    },
}
