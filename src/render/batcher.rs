use crate::render::{
    DrawCommand, DrawFlags, MarkerStyle, PolylineStyle, RenderBatch, RenderFrame,
};

/// Primitives per marker request: each arc costs three request units.
const MARKER_REQUEST_COST: usize = 3;
/// Primitives per polyline request: each vertex costs two request units.
const VERTEX_REQUEST_COST: usize = 2;

/// Per-series appearance resolved at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPaint {
    pub flags: DrawFlags,
    pub marker: MarkerStyle,
    pub line: PolylineStyle,
}

/// Counts of what one `emit` call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchStats {
    pub marker_requests: usize,
    pub polyline_requests: usize,
    pub markers: usize,
    pub vertices: usize,
}

/// Slices prepared geometry into backend-sized requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatcher {
    marker_block: usize,
    line_block: usize,
}

impl DrawBatcher {
    /// `max_request` is the backend cap on request units per call.
    #[must_use]
    pub fn new(max_request: usize) -> Self {
        Self {
            marker_block: (max_request / MARKER_REQUEST_COST).max(1),
            // A polyline chunk needs two vertices to draw anything.
            line_block: (max_request / VERTEX_REQUEST_COST).max(2),
        }
    }

    #[must_use]
    pub fn marker_block(&self) -> usize {
        self.marker_block
    }

    #[must_use]
    pub fn line_block(&self) -> usize {
        self.line_block
    }

    /// Appends the batches to `frame`, walking series in `order` so later
    /// series occlude earlier ones.
    ///
    /// Consecutive polyline chunks share their boundary vertex.
    pub fn emit<F>(
        &self,
        frame: &mut RenderFrame,
        batches: &[RenderBatch],
        order: &[usize],
        paint: F,
    ) -> BatchStats
    where
        F: Fn(usize) -> SeriesPaint,
    {
        let mut stats = BatchStats::default();
        for &index in order {
            let Some(batch) = batches.get(index) else {
                continue;
            };
            let SeriesPaint {
                flags,
                marker,
                line,
            } = paint(index);

            if flags.markers {
                for chunk in batch.markers.chunks(self.marker_block) {
                    frame.push(DrawCommand::Markers {
                        centers: chunk.to_vec(),
                        style: marker,
                    });
                    stats.marker_requests += 1;
                    stats.markers += chunk.len();
                }
            }

            if flags.lines {
                let vertices = &batch.vertices;
                let mut start = 0;
                while start + 1 < vertices.len() {
                    let end = (start + self.line_block).min(vertices.len());
                    frame.push(DrawCommand::Polyline {
                        vertices: vertices[start..end].to_vec(),
                        style: line,
                    });
                    stats.polyline_requests += 1;
                    stats.vertices += end - start;
                    start = end - 1;
                }
            }
        }
        stats
    }
}
