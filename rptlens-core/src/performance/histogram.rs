#[derive(Clone)]
pub struct Histogram {
    buckets: &'static [u32],
    counts: Vec<u64>,
}

impl Histogram {
    pub(crate) fn new(buckets: &'static [u32]) -> Self {
        Self {
            buckets,
            counts: vec![0; buckets.len() + 1], // overflow bucket
        }
    }

    pub(crate) fn record(&mut self, value: u32) {
        let idx = self
            .buckets
            .iter()
            .position(|b| value <= *b)
            .unwrap_or(self.buckets.len());
        self.counts[idx] += 1;
    }

    pub(crate) fn snapshot(&self) -> Vec<(String, u64)> {
        let mut out = Vec::with_capacity(self.counts.len());

        for (i, c) in self.counts.iter().enumerate() {
            let label = match (i, self.buckets.last()) {
                (_, None) => "all".to_string(),
                (0, Some(_)) => format!("0–{} fps", self.buckets[0]),
                (i, Some(_)) if i < self.buckets.len() => {
                    format!("{}–{} fps", self.buckets[i - 1] + 1, self.buckets[i])
                }
                (_, Some(last)) => format!(">{last} fps"),
            };

            out.push((label, *c));
        }

        out
    }
}
