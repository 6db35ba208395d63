//! Composite matchers: list, tag choice and quantity choice.

use std::collections::HashMap;

use tessera_core::SpritePlacement;
use tessera_tags::{ClassificationBits, GraphicTag};

use crate::matcher::Matcher;
use crate::request::TileMatchRequest;

/// Runs every child and reports whether any of them matched.
#[derive(Debug)]
pub struct ListMatcher<B: ClassificationBits, E> {
    children: Vec<Matcher<B, E>>,
    thread_safe: bool,
}

impl<B: ClassificationBits, E> ListMatcher<B, E> {
    /// Create a list over `children`, run in order.
    pub fn new(children: Vec<Matcher<B, E>>) -> Self {
        let thread_safe = children.iter().all(Matcher::is_thread_safe);
        Self {
            children,
            thread_safe,
        }
    }

    /// Run all children. Logical OR of their results.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        let mut any = false;
        for child in &self.children {
            any |= child.match_tile(request, out);
        }
        any
    }

    /// Children, in order.
    pub fn children(&self) -> &[Matcher<B, E>] {
        &self.children
    }

    /// AND of the children's thread-safety.
    pub fn is_thread_safe(&self) -> bool {
        self.thread_safe
    }
}

/// Dispatches on the tile's own tag to at most one child.
#[derive(Debug)]
pub struct ChoiceMatcher<B: ClassificationBits, E> {
    routes: HashMap<GraphicTag, usize>,
    children: Vec<Matcher<B, E>>,
    thread_safe: bool,
}

impl<B: ClassificationBits, E> ChoiceMatcher<B, E> {
    /// Create a choice from `(tags, child)` pairs.
    ///
    /// A tag listed under more than one child routes to the last one; a
    /// warning is logged.
    pub fn new(choices: Vec<(Vec<GraphicTag>, Matcher<B, E>)>) -> Self {
        let mut routes = HashMap::new();
        let mut children = Vec::with_capacity(choices.len());
        for (index, (tags, child)) in choices.into_iter().enumerate() {
            for tag in tags {
                if let Some(previous) = routes.insert(tag.clone(), index) {
                    log::warn!(
                        "tag '{tag}' is listed in choices {previous} and {index}; using {index}"
                    );
                }
            }
            children.push(child);
        }
        let thread_safe = children.iter().all(Matcher::is_thread_safe);
        Self {
            routes,
            children,
            thread_safe,
        }
    }

    /// Run the child registered for the request tag; `false` if none is.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        self.routes
            .get(&request.tag)
            .and_then(|&i| self.children.get(i))
            .is_some_and(|child| child.match_tile(request, out))
    }

    /// AND of the children's thread-safety.
    pub fn is_thread_safe(&self) -> bool {
        self.thread_safe
    }
}

/// Dispatches on the request's quantity to one child.
///
/// Children are kept sorted by threshold. An exact threshold hit picks
/// that child; otherwise the first child with a larger threshold is used,
/// and quantities past the top threshold use the last child.
#[derive(Debug)]
pub struct QuantityChoiceMatcher<B: ClassificationBits, E> {
    thresholds: Vec<i64>,
    children: Vec<Matcher<B, E>>,
    thread_safe: bool,
}

impl<B: ClassificationBits, E> QuantityChoiceMatcher<B, E> {
    /// Create a choice from `(threshold, child)` pairs in any order.
    ///
    /// A repeated threshold keeps the child listed last; a warning is
    /// logged.
    pub fn new(mut choices: Vec<(i64, Matcher<B, E>)>) -> Self {
        // stable: equal thresholds keep their listed order
        choices.sort_by_key(|(threshold, _)| *threshold);
        let mut thresholds: Vec<i64> = Vec::with_capacity(choices.len());
        let mut children: Vec<Matcher<B, E>> = Vec::with_capacity(choices.len());
        for (threshold, child) in choices {
            if thresholds.last() == Some(&threshold) {
                log::warn!("quantity threshold {threshold} is listed twice; using the last");
                children.pop();
                thresholds.pop();
            }
            thresholds.push(threshold);
            children.push(child);
        }
        let thread_safe = children.iter().all(Matcher::is_thread_safe);
        Self {
            thresholds,
            children,
            thread_safe,
        }
    }

    /// Index of the child serving `quantity`, if any child exists.
    pub fn select(&self, quantity: i64) -> Option<usize> {
        let last = self.thresholds.len().checked_sub(1)?;
        Some(match self.thresholds.binary_search(&quantity) {
            Ok(i) => i,
            Err(i) => i.min(last),
        })
    }

    /// Run the child chosen by the request's quantity.
    ///
    /// `false` if the request carries no quantity or there are no children.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        request
            .quantity
            .and_then(|q| self.select(q))
            .and_then(|i| self.children.get(i))
            .is_some_and(|child| child.match_tile(request, out))
    }

    /// Thresholds, ascending.
    pub fn thresholds(&self) -> &[i64] {
        &self.thresholds
    }

    /// AND of the children's thread-safety.
    pub fn is_thread_safe(&self) -> bool {
        self.thread_safe
    }
}
