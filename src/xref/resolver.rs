use super::index::XrefIndex;
use super::section::{ObjectLocation, XRefKind, XrefSection};
use crate::types::{ObjectId, PdfDictionary};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Anomalies observed while recording and resolving the chain. None of these
/// abort resolution; each degrades to the best partial result. The resolver
/// keeps every warning it emits so callers can inspect them after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XrefWarning {
    /// Resolution was requested without a startxref offset.
    #[error("no startxref offset known, merging all cross-reference sections in file order")]
    NoStartOffset,
    /// The declared startxref offset matches no recorded section.
    #[error("no cross-reference section at startxref offset {0}, merging all sections in file order")]
    StartOffsetNotFound(u64),
    /// A trailer's /Prev value points at no recorded section.
    #[error("no cross-reference section at offset {0} referenced by /Prev")]
    DanglingPrev(i64),
    /// A second resolution attempt on an already resolved chain.
    #[error("cross-reference chain already resolved, keeping the first result")]
    AlreadyResolved,
}

/// The merged result of chain resolution.
#[derive(Debug, Clone, Default)]
struct ResolvedXref {
    kind: XRefKind,
    trailer: PdfDictionary,
    entries: HashMap<ObjectId, ObjectLocation>,
}

/// Mutable handle to the revision most recently begun on the resolver.
///
/// The handle borrows the section stored in the resolver's index, so entries
/// and the trailer can only be recorded between `begin_revision` and the next
/// call on the resolver. Recording into a revision that was never begun is
/// unrepresentable.
#[derive(Debug)]
pub struct RevisionBuilder<'a> {
    section: &'a mut XrefSection,
}

impl RevisionBuilder<'_> {
    /// Inserts or overwrites the location of `id` in this revision.
    pub fn add_entry(&mut self, id: ObjectId, location: ObjectLocation) {
        self.section.add_entry(id, location);
    }

    /// Sets this revision's trailer dictionary.
    pub fn set_trailer(&mut self, trailer: PdfDictionary) {
        self.section.set_trailer(trailer);
    }

    pub fn trailer(&self) -> Option<&PdfDictionary> {
        self.section.trailer()
    }
}

/// Reconciles the cross-reference sections of an incrementally updated file
/// into the single table and trailer a conformant reader must use.
///
/// A file that was updated in place carries one cross-reference section per
/// revision, each trailer pointing at its predecessor through `/Prev`, and a
/// final startxref offset naming the newest section. During the scan phase
/// the caller records every discovered section:
///
/// - `begin_revision(byte_pos, kind)` opens the section found at `byte_pos`
///   and returns a [`RevisionBuilder`] for filling it in;
/// - once all sections are recorded, `resolve(start_xref)` walks the `/Prev`
///   chain from the declared head and merges the visited revisions oldest
///   first, so that a newer revision's entries and trailer fields overwrite
///   older ones.
///
/// Malformed files never abort resolution: a missing or dangling head falls
/// back to merging every known section in ascending byte order, a dangling
/// `/Prev` truncates the chain, and a cyclic chain is cut off once the walk
/// has visited as many positions as there are known revisions. Every
/// degradation is recorded as an [`XrefWarning`] and mirrored to the log.
#[derive(Debug, Default)]
pub struct XrefChainResolver {
    index: XrefIndex,
    current: Option<u64>,
    resolved: Option<ResolvedXref>,
    warnings: Vec<XrefWarning>,
}

impl XrefChainResolver {
    pub fn new() -> Self {
        XrefChainResolver::default()
    }

    /// Opens the revision whose cross-reference section starts at `byte_pos`,
    /// replacing any section previously recorded at that position.
    ///
    /// # Arguments
    ///
    /// * `byte_pos` - File offset at which the section starts
    /// * `kind` - Whether the section is a classic table or an xref stream
    ///
    /// # Returns
    ///
    /// A builder borrowing the stored section; entries and the trailer
    /// recorded through it land in this revision.
    pub fn begin_revision(&mut self, byte_pos: u64, kind: XRefKind) -> RevisionBuilder<'_> {
        debug!(
            "beginning cross-reference revision at offset {} ({:?})",
            byte_pos, kind
        );
        self.current = Some(byte_pos);
        let section = self.index.insert(byte_pos, XrefSection::new(kind));
        RevisionBuilder { section }
    }

    /// Trailer of the most recently begun revision, if any has been begun and
    /// has recorded a trailer.
    pub fn current_trailer(&self) -> Option<&PdfDictionary> {
        self.current
            .and_then(|pos| self.index.get(pos))
            .and_then(|section| section.trailer())
    }

    /// Trailer of the revision at the smallest byte position, independent of
    /// resolution. `None` when no revisions are recorded.
    pub fn first_trailer(&self) -> Option<&PdfDictionary> {
        self.index.first().and_then(|(_, section)| section.trailer())
    }

    /// Trailer of the revision at the largest byte position, independent of
    /// resolution. `None` when no revisions are recorded.
    pub fn last_trailer(&self) -> Option<&PdfDictionary> {
        self.index.last().and_then(|(_, section)| section.trailer())
    }

    /// Number of revisions recorded so far.
    pub fn revision_count(&self) -> usize {
        self.index.len()
    }

    /// Resolves the chain once, starting from the declared startxref offset.
    ///
    /// Walks `/Prev` pointers from the head to the oldest revision, then
    /// merges the visited revisions oldest first: each revision's trailer
    /// pairs and object locations overwrite whatever older revisions wrote
    /// for the same key. When `start_xref` is `None` or matches no recorded
    /// section, every known section is merged in ascending byte order
    /// instead and the resolved kind stays `Table`.
    ///
    /// A second call is a no-op that records [`XrefWarning::AlreadyResolved`];
    /// the first result is kept.
    pub fn resolve(&mut self, start_xref: Option<u64>) {
        if self.resolved.is_some() {
            self.record(XrefWarning::AlreadyResolved);
            return;
        }

        let mut resolved = ResolvedXref::default();

        let head =
            start_xref.and_then(|pos| self.index.get(pos).map(|section| (pos, section.kind())));

        let chain: Vec<u64> = match head {
            Some((head_pos, head_kind)) => {
                resolved.kind = head_kind;
                self.chain_from(head_pos)
            }
            None => {
                match start_xref {
                    Some(pos) => self.record(XrefWarning::StartOffsetNotFound(pos)),
                    None => self.record(XrefWarning::NoStartOffset),
                }
                self.index.positions().collect()
            }
        };

        debug!(
            "merging {} of {} cross-reference revisions",
            chain.len(),
            self.index.len()
        );

        for pos in chain {
            let Some(section) = self.index.get(pos) else {
                continue;
            };
            if let Some(trailer) = section.trailer() {
                resolved.trailer.merge(trailer);
            }
            resolved
                .entries
                .extend(section.entries().iter().map(|(id, loc)| (*id, *loc)));
        }

        self.resolved = Some(resolved);
    }

    /// Follows /Prev pointers from `head_pos` and returns the visited byte
    /// positions ordered oldest first.
    fn chain_from(&mut self, head_pos: u64) -> Vec<u64> {
        let mut chain = vec![head_pos];
        let mut cursor = head_pos;
        loop {
            let prev = self
                .index
                .get(cursor)
                .and_then(|section| section.trailer())
                .and_then(|trailer| trailer.get("Prev"))
                .and_then(|value| value.as_integer());
            let Some(prev) = prev else {
                break;
            };
            let target = u64::try_from(prev).ok().filter(|pos| self.index.contains(*pos));
            let Some(target) = target else {
                self.record(XrefWarning::DanglingPrev(prev));
                break;
            };
            chain.push(target);
            cursor = target;
            // A chain visiting as many positions as there are revisions
            // cannot grow further without repeating one.
            if chain.len() >= self.index.len() {
                break;
            }
        }
        chain.reverse();
        chain
    }

    /// Kind of the section the resolved chain started from, `None` until
    /// resolved.
    pub fn resolved_kind(&self) -> Option<XRefKind> {
        self.resolved.as_ref().map(|resolved| resolved.kind)
    }

    /// The merged trailer, `None` until resolved.
    pub fn resolved_trailer(&self) -> Option<&PdfDictionary> {
        self.resolved.as_ref().map(|resolved| &resolved.trailer)
    }

    /// The merged object-location table, `None` until resolved.
    pub fn resolved_entries(&self) -> Option<&HashMap<ObjectId, ObjectLocation>> {
        self.resolved.as_ref().map(|resolved| &resolved.entries)
    }

    /// Object numbers of all resolved entries stored inside the object
    /// stream numbered `container`. `None` until resolved.
    pub fn contained_object_numbers(&self, container: u32) -> Option<HashSet<u32>> {
        let resolved = self.resolved.as_ref()?;
        Some(
            resolved
                .entries
                .iter()
                .filter_map(|(id, location)| match location {
                    ObjectLocation::Compressed { container: c } if *c == container => {
                        Some(id.number)
                    }
                    _ => None,
                })
                .collect(),
        )
    }

    /// Warnings recorded so far, in emission order.
    pub fn warnings(&self) -> &[XrefWarning] {
        &self.warnings
    }

    fn record(&mut self, warning: XrefWarning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}
