//! DCR highlight XML reader.
//!
//! A DCR graph document carries its evidence as highlights. Each highlight
//! names an element type, the item (element id) it belongs to, and one or
//! more text ranges:
//!
//! ```xml
//! <dcrgraph>
//!   <highlights>
//!     <highlight type="activity">
//!       <layers>
//!         <layer name="description">
//!           <ranges>
//!             <range start="0" end="10">register claim</range>
//!           </ranges>
//!         </layer>
//!       </layers>
//!       <items>
//!         <item id="Activity1"/>
//!       </items>
//!     </highlight>
//!   </highlights>
//! </dcrgraph>
//! ```
//!
//! Highlights with the same type and item id are merged into one element.
//! The same reader also walks compare requests, where graphs are nested in
//! `source_graph` and `target_graph` and the settings are text elements.
//! When `source_graph` or `target_graph` holds several child graphs, only
//! the last one is kept.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};

use super::InterchangeError;
use crate::model::{Element, ElementId, ElementKind, Graph, Highlight};

/// Extract a graph from a DCR highlight XML document.
///
/// Only `activity`, `role` and `rule` highlights are read (case-insensitive);
/// other highlight types are skipped.
pub fn graph_from_xml(input: &[u8]) -> Result<Graph, InterchangeError> {
    let document = DcrReader::new().read(input)?;
    Ok(document.graph.build())
}

/// Which graph a highlight belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// A standalone graph document.
    Graph,
    Source,
    Target,
}

/// Request settings carried as element text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    CompareType,
    CompareMethod,
    EvaluationMethod,
}

/// Collects elements in document order, merging by kind and id.
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    elements: IndexMap<(ElementKind, ElementId), Element>,
}

impl GraphBuilder {
    fn attach(&mut self, kind: ElementKind, id: ElementId, highlights: Vec<Highlight>) {
        let element = self
            .elements
            .entry((kind, id.clone()))
            .or_insert_with(|| Element::new(id, kind));
        element.highlights.extend(highlights);
    }

    pub(crate) fn build(self) -> Graph {
        let mut graph = Graph::new();
        for element in self.elements.into_values() {
            graph.add(element);
        }
        graph
    }
}

/// Everything read from one document.
#[derive(Debug, Default)]
pub(crate) struct DcrDocument {
    pub graph: GraphBuilder,
    pub source: Option<GraphBuilder>,
    pub target: Option<GraphBuilder>,
    pub compare_types: Vec<String>,
    pub compare_methods: Vec<String>,
    pub evaluation_methods: Vec<String>,
}

impl DcrDocument {
    fn builder_mut(&mut self, slot: Slot) -> &mut GraphBuilder {
        match slot {
            Slot::Graph => &mut self.graph,
            Slot::Source => self.source.get_or_insert_with(GraphBuilder::default),
            Slot::Target => self.target.get_or_insert_with(GraphBuilder::default),
        }
    }
}

/// A highlight whose closing tag has not been reached yet.
#[derive(Debug)]
struct PendingHighlight {
    depth: usize,
    slot: Slot,
    kind: ElementKind,
    item: Option<ElementId>,
    ranges: Vec<Highlight>,
}

/// Streaming reader over quick-xml events.
pub(crate) struct DcrReader {
    /// Local names of the open elements.
    stack: Vec<String>,
    highlight: Option<PendingHighlight>,
    /// Open `range` element and its depth; text is appended until it closes.
    range: Option<(usize, Highlight)>,
    /// Open settings element and its depth.
    field: Option<(usize, Field, String)>,
    document: DcrDocument,
}

impl DcrReader {
    pub(crate) fn new() -> Self {
        Self {
            stack: Vec::new(),
            highlight: None,
            range: None,
            field: None,
            document: DcrDocument::default(),
        }
    }

    pub(crate) fn read(mut self, input: &[u8]) -> Result<DcrDocument, InterchangeError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    self.handle_start_element(e)?;
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as start + end
                    self.handle_start_element(e)?;
                    self.handle_end_element();
                }
                Ok(Event::End(_)) => {
                    self.handle_end_element();
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| InterchangeError::xml(format!("Text error: {e}")))?;
                    self.handle_text(&text);
                }
                Ok(Event::CData(ref c)) => {
                    let text = std::str::from_utf8(c)
                        .map_err(|e| InterchangeError::xml(format!("Invalid UTF-8: {e}")))?;
                    self.handle_text(text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(InterchangeError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(self.document)
    }

    fn handle_start_element(&mut self, e: &BytesStart<'_>) -> Result<(), InterchangeError> {
        let local = e.local_name();
        let name = std::str::from_utf8(local.as_ref())
            .map_err(|e| InterchangeError::xml(format!("Invalid tag name: {e}")))?
            .to_string();
        let depth = self.stack.len();
        let parent = self.stack.last().map(String::as_str);

        match (parent, name.as_str()) {
            (Some("highlights"), "highlight") => self.begin_highlight(e, depth)?,
            (Some("items"), "item") => {
                if let Some(highlight) = self.highlight.as_mut() {
                    // The last item wins when a highlight lists several.
                    highlight.item = Some(ElementId::new(required_attribute(e, "id")?));
                }
            }
            (Some("ranges"), _) if self.highlight.is_some() && self.in_layer() => {
                self.range = Some((depth, read_range(e)?));
            }
            (Some("compare_types"), "type") => {
                self.field = Some((depth, Field::CompareType, String::new()));
            }
            (Some("compare_methods"), "compare_method") => {
                self.field = Some((depth, Field::CompareMethod, String::new()));
            }
            (Some("evaluation_methods"), "evaluation_method") => {
                self.field = Some((depth, Field::EvaluationMethod, String::new()));
            }
            (Some("source_graph"), _) => {
                self.document.source = Some(GraphBuilder::default());
            }
            (Some("target_graph"), _) => {
                self.document.target = Some(GraphBuilder::default());
            }
            (_, "source_graph") => {
                self.document.builder_mut(Slot::Source);
            }
            (_, "target_graph") => {
                self.document.builder_mut(Slot::Target);
            }
            _ => {}
        }

        self.stack.push(name);
        Ok(())
    }

    fn handle_end_element(&mut self) {
        self.stack.pop();
        let depth = self.stack.len();

        if self.range.as_ref().is_some_and(|(d, _)| *d == depth) {
            if let (Some((_, mut range)), Some(highlight)) =
                (self.range.take(), self.highlight.as_mut())
            {
                if range.text.as_deref().is_some_and(str::is_empty) {
                    range.text = None;
                }
                highlight.ranges.push(range);
            }
        }

        if self.field.as_ref().is_some_and(|(d, _, _)| *d == depth) {
            if let Some((_, field, value)) = self.field.take() {
                let value = value.trim().to_string();
                match field {
                    Field::CompareType => self.document.compare_types.push(value),
                    Field::CompareMethod => self.document.compare_methods.push(value),
                    Field::EvaluationMethod => self.document.evaluation_methods.push(value),
                }
            }
        }

        if self.highlight.as_ref().is_some_and(|h| h.depth == depth) {
            if let Some(highlight) = self.highlight.take() {
                self.finish_highlight(highlight);
            }
        }
    }

    fn handle_text(&mut self, text: &str) {
        if let Some((_, range)) = self.range.as_mut() {
            range.text.get_or_insert_with(String::new).push_str(text);
        }
        if let Some((_, _, value)) = self.field.as_mut() {
            value.push_str(text);
        }
    }

    fn begin_highlight(&mut self, e: &BytesStart<'_>, depth: usize) -> Result<(), InterchangeError> {
        let Some(tag) = optional_attribute(e, "type")? else {
            debug!("Skipping highlight without a type");
            return Ok(());
        };
        let kind = match tag.parse::<ElementKind>() {
            Ok(kind) => kind,
            Err(_) => {
                debug!("Skipping highlight of type '{}'", tag);
                return Ok(());
            }
        };

        self.highlight = Some(PendingHighlight {
            depth,
            slot: self.current_slot(),
            kind,
            item: None,
            ranges: Vec::new(),
        });
        Ok(())
    }

    fn finish_highlight(&mut self, highlight: PendingHighlight) {
        let Some(id) = highlight.item else {
            warn!(
                "Skipping {} highlight with {} ranges: no item",
                highlight.kind,
                highlight.ranges.len()
            );
            return;
        };
        self.document
            .builder_mut(highlight.slot)
            .attach(highlight.kind, id, highlight.ranges);
    }

    /// Check if the open `ranges` element sits in `layers/layer/ranges`.
    fn in_layer(&self) -> bool {
        let n = self.stack.len();
        n >= 3 && self.stack[n - 2] == "layer" && self.stack[n - 3] == "layers"
    }

    fn current_slot(&self) -> Slot {
        for tag in self.stack.iter().rev() {
            match tag.as_str() {
                "source_graph" => return Slot::Source,
                "target_graph" => return Slot::Target,
                _ => {}
            }
        }
        Slot::Graph
    }
}

fn optional_attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, InterchangeError> {
    let attr = e
        .try_get_attribute(key)
        .map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
    attr.map(|a| {
        a.unescape_value()
            .map(|v| v.to_string())
            .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))
    })
    .transpose()
}

fn required_attribute(e: &BytesStart<'_>, key: &str) -> Result<String, InterchangeError> {
    optional_attribute(e, key)?.ok_or_else(|| InterchangeError::missing_attribute(key))
}

fn read_range(e: &BytesStart<'_>) -> Result<Highlight, InterchangeError> {
    let offset = |key: &str| -> Result<i64, InterchangeError> {
        let value = required_attribute(e, key)?;
        value.trim().parse().map_err(|_| {
            InterchangeError::invalid_attribute(format!("range {key} '{value}' is not an integer"))
        })
    };
    Ok(Highlight::new(offset("start")?, offset("end")?))
}
