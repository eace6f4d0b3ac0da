/// Index bookkeeping for a tab collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabsState {
    count: usize,
    current: usize,
    previous: usize,
}

/// Outcome of a successful [`TabsState::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub previous: usize,
}

impl TabsState {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            previous: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Make `index` the current tab. Out of range leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Option<Selection> {
        if index >= self.count {
            return None;
        }

        self.previous = self.current;
        self.current = index;

        Some(Selection {
            index,
            previous: self.previous,
        })
    }
}

/// What showing a tab comes down to: the new selection and the position of
/// the section to reveal, if any section carries the target id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub selection: Selection,
    pub section: Option<usize>,
}

impl TabsState {
    /// Select `index` and find its section among `section_ids`.
    ///
    /// A tab without a matching section still becomes current; every section
    /// stays hidden in that case.
    pub fn activate<S: AsRef<str>>(
        &mut self,
        index: usize,
        target: Option<&str>,
        section_ids: &[S],
    ) -> Option<Activation> {
        let selection = self.select(index)?;
        let section = target.and_then(|target| {
            section_ids
                .iter()
                .position(|id| id.as_ref() == target)
        });

        Some(Activation { selection, section })
    }
}

/// Position of `tab` in this widget's own collection. Tabs that belong to
/// another widget resolve to `None`, whatever index they carry there.
pub fn tab_index<T: PartialEq>(tabs: &[T], tab: &T) -> Option<usize> {
    tabs.iter().position(|candidate| candidate == tab)
}

/// Index to show on load for a collection of `count` tabs.
///
/// The persisted value wins when it is a whole, non-negative number inside
/// the collection; otherwise `default_index` is used. `None` when even the
/// default is out of range. Like `parseFloat`, only the numeric prefix of the
/// stored value counts.
pub fn initial_index(stored: Option<&str>, default_index: usize, count: usize) -> Option<usize> {
    stored
        .and_then(parse_numeric_prefix)
        .filter(|value| value.fract() == 0.0 && *value >= 0.0 && *value < count as f64)
        .map(|value| value as usize)
        .or(Some(default_index))
        .filter(|index| *index < count)
}

fn parse_numeric_prefix(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    end = digits_from(end);
    if end < bytes.len() && bytes[end] == b'.' {
        end = digits_from(end + 1);
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    raw[..end].parse::<f64>().ok()
}
