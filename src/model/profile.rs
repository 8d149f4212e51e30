use super::error::Error;
use super::isotope::canonical_name;

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Tabulated composition against exterior mass coordinate.
///
/// Stored column-major: one `xq` vector plus an ordered list of named
/// mass-fraction columns, all of the same length. Columns can be added and
/// accumulated into after construction, which is how isotopes outside a
/// reaction network get folded into ones inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositionProfile {
    xq: Vec<f64>,
    columns: Vec<Column>,
}

impl CompositionProfile {
    /// Builds a profile from an `xq` vector and named columns.
    ///
    /// No ordering is imposed on `xq`; profiles produced by
    /// [`build`](crate::blend::build) are non-decreasing from 0 to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if a column's length differs from
    /// `xq`'s and [`Error::DuplicateIsotope`] if a name repeats.
    pub fn from_columns<I, S>(xq: Vec<f64>, columns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut profile = Self {
            xq,
            columns: Vec::new(),
        };
        for (name, values) in columns {
            profile.add_column(name, values)?;
        }
        Ok(profile)
    }

    /// Builds a profile from row-major data: one fraction slice per `xq`,
    /// laid out in `isotopes` order.
    pub(crate) fn from_rows(isotopes: &[String], rows: Vec<(f64, &[f64])>) -> Result<Self, Error> {
        let mut xq = Vec::with_capacity(rows.len());
        let mut columns: Vec<Column> = isotopes
            .iter()
            .map(|name| Column {
                name: name.clone(),
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for (coord, fractions) in rows {
            if fractions.len() != isotopes.len() {
                return Err(Error::length_mismatch(
                    format!("row at xq = {coord}"),
                    isotopes.len(),
                    fractions.len(),
                ));
            }
            xq.push(coord);
            for (column, &x) in columns.iter_mut().zip(fractions) {
                column.values.push(x);
            }
        }

        Ok(Self { xq, columns })
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.xq.len()
    }

    #[inline]
    pub fn isotope_count(&self) -> usize {
        self.columns.len()
    }

    pub fn xq(&self) -> &[f64] {
        &self.xq
    }

    /// The `xq` of row `index` and its fractions in column order.
    pub fn row(&self, index: usize) -> Option<(f64, Vec<(&str, f64)>)> {
        let xq = *self.xq.get(index)?;
        let fractions = self
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.values[index]))
            .collect();
        Some((xq, fractions))
    }

    /// Isotope field names in column order.
    pub fn isotopes(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, isotope: &str) -> bool {
        self.position(isotope).is_some()
    }

    pub fn column(&self, isotope: &str) -> Option<&[f64]> {
        self.position(isotope)
            .map(|idx| self.columns[idx].values.as_slice())
    }

    /// Appends a new column after the existing ones, under the isotope's
    /// canonical spelling.
    pub fn add_column(&mut self, isotope: impl Into<String>, values: Vec<f64>) -> Result<(), Error> {
        let name = canonical_name(&isotope.into());
        if self.contains(&name) {
            return Err(Error::DuplicateIsotope(name));
        }
        if values.len() != self.xq.len() {
            return Err(Error::length_mismatch(name, self.xq.len(), values.len()));
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Adds `source`'s values row by row into `target`.
    ///
    /// Folding a column into itself doubles it.
    pub fn accumulate_into(&mut self, target: &str, source: &str) -> Result<(), Error> {
        let src = self
            .position(source)
            .ok_or_else(|| Error::UnknownColumn(source.to_string()))?;
        let dst = self
            .position(target)
            .ok_or_else(|| Error::UnknownColumn(target.to_string()))?;

        let addend = self.columns[src].values.clone();
        for (value, x) in self.columns[dst].values.iter_mut().zip(addend) {
            *value += x;
        }
        Ok(())
    }

    /// Integrated mass of an isotope over the profile.
    ///
    /// Left-rectangle rule over consecutive `xq` intervals: each interval is
    /// weighted by the fraction at its outer row, so the innermost row
    /// contributes nothing.
    pub fn total_mass(&self, isotope: &str) -> Option<f64> {
        let values = self.column(isotope)?;
        Some(
            self.xq
                .windows(2)
                .zip(values)
                .map(|(pair, x)| x * (pair[1] - pair[0]))
                .sum(),
        )
    }

    fn position(&self, isotope: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == isotope)
    }
}
