//! Deterministic local heuristics used when the provider cannot answer.
//!
//! Every function here is pure: identical input yields identical output, and
//! none of them can fail. The only shared state is the immutable
//! [`StopwordSet`].

pub mod improve;
pub mod segment;
pub mod stopwords;
pub mod summary;
pub mod tags;
pub mod title;

pub use improve::improve;
pub use stopwords::StopwordSet;
pub use summary::summarize;
pub use tags::{tags, WordFrequencyTable};
pub use title::title;

use notewise_core::{DerivationRequest, Operation, Payload};

/// Run the fallback heuristic for `op`.
pub fn derive(op: Operation, request: &DerivationRequest, stopwords: &StopwordSet) -> Payload {
    match op {
        Operation::Summarize => Payload::Summary(summarize(request.content())),
        Operation::Improve => Payload::ImprovedText(improve(request.content())),
        Operation::Tags => Payload::Tags(tags(request.content(), request.title(), stopwords)),
        Operation::Title => Payload::Title(title(request.content())),
    }
}
