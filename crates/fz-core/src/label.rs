use serde::Serialize;

use crate::ids::ContainerUuid;
use crate::scan::encode_payload;

pub const MAX_LABEL_BATCH: u32 = 500;
pub const DEFAULT_LABEL_BATCH: u32 = 21;

/// One blank label ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSpec {
    pub uuid: ContainerUuid,
    /// Text to encode in the QR code.
    pub payload: String,
    /// Short caption printed under the code for manual identification.
    pub caption: String,
}

impl LabelSpec {
    pub fn new(uuid: ContainerUuid) -> Self {
        Self {
            payload: encode_payload(&uuid),
            caption: uuid.short().to_string(),
            uuid,
        }
    }
}

pub fn clamp_batch(count: u32) -> u32 {
    count.clamp(1, MAX_LABEL_BATCH)
}

/// Fresh labels with random uuids; `count` is clamped to `1..=MAX_LABEL_BATCH`.
pub fn generate(count: u32) -> Vec<LabelSpec> {
    (0..clamp_batch(count))
        .map(|_| LabelSpec::new(ContainerUuid::generate()))
        .collect()
}

/// Grid geometry of a printable sheet, in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub code_size: f32,
    pub caption_height: f32,
    pub h_gap: f32,
    pub v_gap: f32,
}

impl SheetLayout {
    pub fn a4() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 34.0,
            code_size: 90.0,
            caption_height: 12.0,
            h_gap: 18.0,
            v_gap: 28.0,
        }
    }

    pub fn letter() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            ..Self::a4()
        }
    }

    pub fn columns(&self) -> usize {
        let avail = self.page_width - 2.0 * self.margin;
        (((avail + self.h_gap) / (self.code_size + self.h_gap)) as usize).max(1)
    }

    pub fn rows(&self) -> usize {
        let avail = self.page_height - 2.0 * self.margin;
        let cell = self.code_size + self.caption_height + self.v_gap;
        (((avail + self.v_gap) / cell) as usize).max(1)
    }

    pub fn per_page(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Split labels into pages; always at least one (possibly empty) page.
    pub fn paginate<'a>(&self, labels: &'a [LabelSpec]) -> Vec<&'a [LabelSpec]> {
        if labels.is_empty() {
            return vec![labels];
        }
        labels.chunks(self.per_page()).collect()
    }
}
