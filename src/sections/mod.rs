//! Static résumé sections. Each one renders its table as given.

pub mod about;
pub mod certifications;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod personal;
pub mod skills;
