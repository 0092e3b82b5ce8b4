use crate::core::features::{FEATURE_COLUMNS, FeatureVector, NUM_FEATURES};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::streams::{DatasetError, Stream};
use crate::utils::file_parsing::{parse_binary_label, split_csv_record};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

type PendingLine = Result<(usize, String), DatasetError>;

/// Finite stream over a comma-separated file with a header row.
///
/// Blank lines are skipped. Columns other than the features and the class
/// are ignored.
pub struct CsvFileStream {
    path: PathBuf,
    header: InstanceHeader,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    pending: Option<PendingLine>,
}

impl CsvFileStream {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref().to_path_buf();
        let (header, lines) = Self::read_header(&path)?;
        let mut stream = Self {
            path,
            header,
            lines,
            line_no: 1,
            pending: None,
        };
        stream.advance();
        Ok(stream)
    }

    fn read_header(
        path: &Path,
    ) -> Result<(InstanceHeader, Lines<BufReader<File>>), DatasetError> {
        let io_err = |source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let mut lines = BufReader::new(file).lines();

        let first = match lines.next() {
            Some(line) => line.map_err(io_err)?,
            None => return Err(DatasetError::EmptyFile(path.to_path_buf())),
        };
        let first = first.trim_start_matches('\u{feff}');
        if first.trim().is_empty() {
            return Err(DatasetError::EmptyFile(path.to_path_buf()));
        }

        let relation = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let header = InstanceHeader::from_columns(relation, split_csv_record(first))?;
        Ok((header, lines))
    }

    fn advance(&mut self) {
        self.pending = None;
        for line in self.lines.by_ref() {
            self.line_no += 1;
            match line {
                Ok(l) if l.trim().is_empty() => continue,
                Ok(l) => {
                    self.pending = Some(Ok((self.line_no, l)));
                    return;
                }
                Err(source) => {
                    self.pending = Some(Err(DatasetError::Io {
                        path: self.path.clone(),
                        source,
                    }));
                    return;
                }
            }
        }
    }

    fn parse_record(&self, line_no: usize, line: &str) -> Result<Instance, DatasetError> {
        let fields = split_csv_record(line);

        let mut values = [0.0; NUM_FEATURES];
        for ((slot, &index), column) in values
            .iter_mut()
            .zip(self.header.feature_indices())
            .zip(FEATURE_COLUMNS)
        {
            let raw = cell(&fields, index, line_no, column)?;
            *slot = raw
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidValue {
                    line: line_no,
                    column: column.to_string(),
                    value: raw.to_string(),
                })?;
        }

        let class_column = self
            .header
            .attribute_at_index(self.header.class_index())
            .unwrap_or_default();
        let raw = cell(&fields, self.header.class_index(), line_no, class_column)?;
        let class_value = parse_binary_label(raw).ok_or_else(|| DatasetError::InvalidValue {
            line: line_no,
            column: class_column.to_string(),
            value: raw.to_string(),
        })?;

        Ok(Instance::new(FeatureVector::from(values), class_value))
    }
}

fn cell<'a>(
    fields: &'a [String],
    index: usize,
    line: usize,
    column: &str,
) -> Result<&'a str, DatasetError> {
    fields
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| DatasetError::InvalidValue {
            line,
            column: column.to_string(),
            value: String::new(),
        })
}

impl Stream for CsvFileStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.pending.is_some()
    }

    fn next_instance(&mut self) -> Option<Result<Instance, DatasetError>> {
        let pending = self.pending.take()?;
        let out = match pending {
            Ok((line_no, line)) => self.parse_record(line_no, &line),
            Err(e) => Err(e),
        };
        self.advance();
        Some(out)
    }

    fn restart(&mut self) -> Result<(), DatasetError> {
        let (header, lines) = Self::read_header(&self.path)?;
        self.header = header;
        self.lines = lines;
        self.line_no = 1;
        self.advance();
        Ok(())
    }
}
