//! The rewrite rules that keep every expression in normal form.
//!
//! Each operation is a single exhaustive `match` over the shapes of its two operands, ordered
//! from most to least urgent: the absorbing / identity short-circuits come first (so no
//! redundant `Sum` / `Product` node containing a Zero or One is ever built), then the rules
//! that pull scales out and merge equal bases, and finally the generic pairing fallbacks. The
//! first matching arm wins, which makes the precedence of the rule set a syntactic property of
//! the file rather than a runtime lookup.
//!
//! Every rule either returns one of its operands unchanged or builds a new node; operands are
//! never mutated. Rules that reduce something report a [`Step`](step::Step) to the caller's
//! [`StepCollector`](crate::step_collector::StepCollector).

pub mod add;
pub mod multiply;
pub mod step;
