use rand::Rng;

// All parameters for one generated test case.
// Every value comes from a single seeded stream and the draw order in
// `sample` is fixed; reordering the draws changes every downstream byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub field_width: u32,
    pub field_height: u32,
    pub block_height: u32,
    pub smoothness: f64,
    pub block_types: u32,
}

impl FieldParams {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let field_width = rng.gen_range(5..=50);
        let field_height = rng.gen_range(5..=50);
        let block_height = rng.gen_range(0..=field_height);
        let smoothness = rng.gen_range(0.3..0.9);
        let block_types = rng.gen_range(3..=10);

        Self {
            field_width,
            field_height,
            block_height,
            smoothness,
            block_types,
        }
    }

    // Lowest column height; the profile lands in [min_height, field_height]
    pub fn min_height(&self) -> u32 {
        self.field_height - self.block_height
    }

    // Fixed-width diagnostic report.
    // The first two labels carry each other's value: the report has always
    // printed the height under "field width" and the width under
    // "field height", and downstream consumers scrape it in that order.
    pub fn report(&self) -> String {
        format!(
            "field width:   {:6}\n\
             field height:  {:6}\n\
             block height:  {:6}\n\
             smoothness:    {:6.3}\n\
             block types:   {:6}\n",
            self.field_height,
            self.field_width,
            self.block_height,
            self.smoothness,
            self.block_types,
        )
    }
}
