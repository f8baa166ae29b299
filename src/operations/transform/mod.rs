mod rigid;
mod rotate;
mod translate;

pub use rigid::RigidTransform;
pub use rotate::Rotate;
pub use translate::Translate;
