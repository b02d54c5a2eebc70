//! Width allocation for table columns.
//!
//! [`allocate`] turns per-column constraints and the width available to the
//! columns into concrete widths. It is a pure function: the same inputs
//! always give the same widths.
//!
//! 1. Columns with a fixed width are pinned and take their width first.
//!    Only when they alone overflow the available width are they trimmed,
//!    widest first, and every other column is left empty.
//! 2. If the natural maxima of the rest fit, every column gets its maximum.
//!    When expanding, the spare width is then shared out: columns with a
//!    ratio split everything left after the others take their maxima, in
//!    proportion to their ratio; without ratios every column gets an equal
//!    share of the surplus.
//! 3. If the maxima do not fit but the minima do, the width is split by
//!    ratio (1 for columns without one), each column held between its
//!    minimum and maximum. With equal ratios this narrows the widest
//!    columns first.
//! 4. If even the minima do not fit, wrapping columns give up their
//!    minimum first and share what is left the same way. Columns that
//!    cannot wrap keep their minimum until nothing else is left; then the
//!    widest of them gives up one cell at a time (lowest index on ties)
//!    until everything fits or every column is empty.
//!
//! Shares are computed with the largest-remainder method: each column gets
//! the floor of its exact share, and the cells left over go one at a time
//! to the largest fractional remainders, ties to the lowest index. This
//! makes the widths sum exactly to the width being distributed.

/// What a column asks of the allocator. Widths include cell padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnConstraint {
    /// Narrowest width that does not break an unbreakable token.
    pub minimum: usize,
    /// Width needed to show the content without wrapping.
    pub maximum: usize,
    /// Pinned width; never grown or shrunk.
    pub fixed: Option<usize>,
    /// Weight when sharing or taking back width.
    pub ratio: Option<usize>,
    /// Whether the content can wrap onto more lines when narrowed.
    pub wrap: bool,
}

impl ColumnConstraint {
    pub fn new(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum: minimum.min(maximum),
            maximum: maximum.max(minimum),
            fixed: None,
            ratio: None,
            wrap: true,
        }
    }

    pub fn fixed(width: usize) -> Self {
        Self {
            minimum: width,
            maximum: width,
            fixed: Some(width),
            ratio: None,
            wrap: false,
        }
    }

    pub fn with_ratio(mut self, ratio: usize) -> Self {
        self.ratio = Some(ratio);
        self
    }

    /// Marks content that is cut rather than wrapped.
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }
}

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without decorations).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resolve column widths for `available` cells.
///
/// # Example
///
/// ```rust
/// use standout_grid::table::{allocate, ColumnConstraint};
///
/// let constraints = [ColumnConstraint::new(3, 10), ColumnConstraint::new(5, 30)];
///
/// // Everything fits: natural widths.
/// assert_eq!(allocate(&constraints, 80, false).widths, vec![10, 30]);
///
/// // Expanding shares the surplus equally.
/// assert_eq!(allocate(&constraints, 50, true).widths, vec![15, 35]);
///
/// // Shrinking narrows the widest column first.
/// assert_eq!(allocate(&constraints, 26, false).widths, vec![10, 16]);
/// ```
pub fn allocate(constraints: &[ColumnConstraint], available: usize, expand: bool) -> ResolvedWidths {
    let mut widths = vec![0; constraints.len()];
    let mut flexible = Vec::new();
    let mut pinned = Vec::new();

    for (index, constraint) in constraints.iter().enumerate() {
        match constraint.fixed {
            Some(width) => {
                widths[index] = width;
                pinned.push(index);
            }
            None => flexible.push(index),
        }
    }

    let fixed_total: usize = pinned.iter().map(|&i| widths[i]).sum();
    if fixed_total > available {
        tracing::warn!(
            fixed = fixed_total,
            available,
            "fixed columns do not fit"
        );
        let trimmed = collapse(pinned.iter().map(|&i| widths[i]).collect(), available);
        for (&index, width) in pinned.iter().zip(trimmed) {
            widths[index] = width;
        }
        tracing::debug!(?widths, available, expand, "resolved column widths");
        return ResolvedWidths { widths };
    }

    let budget = available - fixed_total;
    let minimums: Vec<usize> = flexible
        .iter()
        .map(|&i| constraints[i].minimum.min(constraints[i].maximum))
        .collect();
    let maximums: Vec<usize> = flexible.iter().map(|&i| constraints[i].maximum).collect();
    let max_total: usize = maximums.iter().sum();

    let resolved = if max_total <= budget {
        if expand && max_total < budget && !flexible.is_empty() {
            grow(constraints, &flexible, &minimums, &maximums, budget)
        } else {
            maximums
        }
    } else {
        let columns: Vec<&ColumnConstraint> = flexible.iter().map(|&i| &constraints[i]).collect();
        shrink(&columns, &minimums, &maximums, budget)
    };

    for (&index, width) in flexible.iter().zip(resolved) {
        widths[index] = width;
    }

    tracing::debug!(?widths, available, expand, "resolved column widths");
    ResolvedWidths { widths }
}

/// Take width back from flexible columns whose maxima overflow `budget`.
fn shrink(
    columns: &[&ColumnConstraint],
    minimums: &[usize],
    maximums: &[usize],
    budget: usize,
) -> Vec<usize> {
    let weights: Vec<usize> = columns.iter().map(|c| c.ratio.unwrap_or(1)).collect();
    let min_total: usize = minimums.iter().sum();
    if min_total <= budget {
        return bounded_distribute(budget, &weights, minimums, maximums);
    }

    tracing::warn!(
        minimum = min_total,
        available = budget,
        "columns do not fit at their minimum widths"
    );
    let floors: Vec<usize> = columns
        .iter()
        .zip(minimums)
        .map(|(c, &min)| if c.wrap { 0 } else { min })
        .collect();
    if floors.iter().sum::<usize>() <= budget {
        bounded_distribute(budget, &weights, &floors, maximums)
    } else {
        collapse(floors, budget)
    }
}

/// Share `budget` among flexible columns whose maxima fit in it.
fn grow(
    constraints: &[ColumnConstraint],
    flexible: &[usize],
    minimums: &[usize],
    maximums: &[usize],
    budget: usize,
) -> Vec<usize> {
    let ratios: Vec<Option<usize>> = flexible.iter().map(|&i| constraints[i].ratio).collect();

    if ratios.iter().any(Option::is_some) {
        let mut widths = maximums.to_vec();
        let reserved: usize = ratios
            .iter()
            .zip(maximums)
            .filter(|(ratio, _)| ratio.is_none())
            .map(|(_, max)| max)
            .sum();
        let shared: Vec<usize> = (0..flexible.len()).filter(|&k| ratios[k].is_some()).collect();
        let weights: Vec<usize> = shared.iter().map(|&k| ratios[k].unwrap_or(0)).collect();
        let floors: Vec<usize> = shared.iter().map(|&k| minimums[k]).collect();
        let shares = ratio_distribute(budget - reserved, &weights, &floors);
        for (&k, share) in shared.iter().zip(shares) {
            widths[k] = share;
        }
        widths
    } else {
        let surplus = budget - maximums.iter().sum::<usize>();
        let extra = largest_remainder(surplus, &vec![1; maximums.len()]);
        maximums.iter().zip(extra).map(|(max, add)| max + add).collect()
    }
}

/// Split `total` by `weights`, never giving a column less than its floor.
///
/// Columns whose share would fall below their floor are pinned at the
/// floor and the rest is split again among the others.
pub fn ratio_distribute(total: usize, weights: &[usize], floors: &[usize]) -> Vec<usize> {
    let mut pinned = vec![false; weights.len()];

    loop {
        let pinned_total: usize = floors
            .iter()
            .zip(&pinned)
            .filter(|(_, &p)| p)
            .map(|(floor, _)| floor)
            .sum();
        let open: Vec<usize> = (0..weights.len()).filter(|&i| !pinned[i]).collect();
        let open_weights: Vec<usize> = open.iter().map(|&i| weights[i]).collect();
        let shares = largest_remainder(total.saturating_sub(pinned_total), &open_weights);

        let short: Vec<usize> = open
            .iter()
            .zip(&shares)
            .filter(|(&i, &share)| share < floors[i])
            .map(|(&i, _)| i)
            .collect();

        if short.is_empty() {
            let mut result: Vec<usize> = floors.to_vec();
            for (&i, share) in open.iter().zip(shares) {
                result[i] = share;
            }
            return result;
        }
        for i in short {
            pinned[i] = true;
        }
    }
}

/// Split `total` by `weights`, keeping each part between its floor and cap.
///
/// Expects `sum(floors) <= total <= sum(caps)`. Parts that fall outside
/// their bounds are pinned to the bound and the rest is split again among
/// the others; each round pins whichever side is violated by more.
fn bounded_distribute(total: usize, weights: &[usize], floors: &[usize], caps: &[usize]) -> Vec<usize> {
    let mut result: Vec<Option<usize>> = vec![None; weights.len()];

    loop {
        let pinned_total: usize = result.iter().flatten().sum();
        let open: Vec<usize> = (0..weights.len()).filter(|&i| result[i].is_none()).collect();
        if open.is_empty() {
            break;
        }
        let open_weights: Vec<usize> = open.iter().map(|&i| weights[i]).collect();
        let shares = largest_remainder(total.saturating_sub(pinned_total), &open_weights);

        let (mut over, mut under) = (0, 0);
        for (&i, &share) in open.iter().zip(&shares) {
            over += share.saturating_sub(caps[i]);
            under += floors[i].saturating_sub(share);
        }

        if over == 0 && under == 0 {
            for (&i, share) in open.iter().zip(shares) {
                result[i] = Some(share);
            }
            break;
        }
        for (&i, &share) in open.iter().zip(&shares) {
            if over >= under && share > caps[i] {
                result[i] = Some(caps[i]);
            } else if over < under && share < floors[i] {
                result[i] = Some(floors[i]);
            }
        }
    }

    result.into_iter().map(|width| width.unwrap_or(0)).collect()
}

/// Split `total` in proportion to `weights` so the parts sum to `total`.
///
/// Leftover cells go to the largest fractional remainders, ties to the
/// lowest index. All-zero weights count as equal weights.
pub fn largest_remainder(total: usize, weights: &[usize]) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }
    let weight_total: u128 = weights.iter().map(|&w| w as u128).sum();
    if weight_total == 0 {
        return largest_remainder(total, &vec![1; weights.len()]);
    }

    let total_wide = total as u128;
    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for (index, &weight) in weights.iter().enumerate() {
        let exact = total_wide * weight as u128;
        parts.push((exact / weight_total) as usize);
        remainders.push((exact % weight_total, index));
    }

    let leftover = total - parts.iter().sum::<usize>();
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, index) in remainders.iter().take(leftover) {
        parts[index] += 1;
    }
    parts
}

/// Start at the minima and trim the widest column until `budget` is met.
fn collapse(mut widths: Vec<usize>, budget: usize) -> Vec<usize> {
    let mut total: usize = widths.iter().sum();
    while total > budget {
        let widest = widths
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(index, &width)| (index, width));
        match widest {
            Some((index, width)) if width > 0 => {
                widths[index] -= 1;
                total -= 1;
            }
            _ => break,
        }
    }
    widths
}
