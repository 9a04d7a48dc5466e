use crate::data::record::{Feature, Label, Record};
use csv::ReaderBuilder;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::io::Read;
use std::path::Path;

const CELEBRITIES: [(&str, &str, &str, &str, Label); 10] = [
    ("Beyoncé", "musician", "high", "2000s", Label::Entertainment),
    ("Taylor Swift", "musician", "high", "2010s", Label::Entertainment),
    ("Denzel Washington", "actor", "high", "90s", Label::Entertainment),
    ("Zendaya", "actor", "medium", "2020s", Label::Entertainment),
    ("Michael Jordan", "athlete", "high", "90s", Label::Sports),
    ("LeBron James", "athlete", "high", "2000s", Label::Sports),
    ("Simone Biles", "athlete", "medium", "2010s", Label::Sports),
    ("Ariana Grande", "musician", "medium", "2010s", Label::Entertainment),
    ("Tom Holland", "actor", "medium", "2020s", Label::Entertainment),
    ("Serena Williams", "athlete", "high", "2000s", Label::Sports),
];

/// Immutable, validated set of labelled records.
#[derive(Clone, PartialEq)]
pub struct Roster {
    records: Vec<Record>,
}

impl Debug for Roster {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roster [")?;
        for record in &self.records {
            writeln!(
                f,
                "    {} | {} | {} | {} | {},",
                record.name,
                record.profession,
                record.fame,
                record.era,
                record.label.code()
            )?;
        }
        write!(f, "]")
    }
}

impl Roster {
    /// Creates a roster after checking it can support entropy computations.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no records, if either label class is missing,
    /// or if two records share a name.
    pub fn new(records: Vec<Record>) -> Result<Self, Box<dyn Error>> {
        if records.is_empty() {
            return Err("The roster must contain at least one record.".into());
        }
        for label in [Label::Entertainment, Label::Sports] {
            if !records.iter().any(|record| record.label == label) {
                return Err(format!("The roster has no record labelled {}.", label).into());
            }
        }
        let mut names = HashSet::new();
        for record in &records {
            if !names.insert(record.name.as_str()) {
                return Err(format!("Duplicate celebrity name '{}'.", record.name).into());
            }
        }
        Ok(Self { records })
    }

    /// The built-in ten celebrity roster.
    pub fn celebrities() -> Self {
        let records = CELEBRITIES
            .iter()
            .map(|&(name, profession, fame, era, label)| {
                Record::new(name, profession, fame, era, label)
            })
            .collect();
        Self { records }
    }

    /// Loads a roster from a CSV file with a `name,profession,fame,era,label` header.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;
        Self::from_csv_reader(reader)
    }

    /// Same as [`Roster::from_csv`] but reads from any byte source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Box<dyn Error>> {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv_reader(reader)
    }

    fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, Box<dyn Error>> {
        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            records.push(record);
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name == name)
    }
}

/// Records of a dataset grouped by their value for one feature.
///
/// Groups keep the order in which their value was first met, and records keep
/// their dataset order inside a group.
#[derive(Debug)]
pub struct Split<'a> {
    pub feature: Feature,
    groups: Vec<(&'a str, Vec<&'a Record>)>,
}

impl<'a> Split<'a> {
    pub fn groups(&self) -> &[(&'a str, Vec<&'a Record>)] {
        &self.groups
    }

    pub fn get(&self, value: &str) -> Option<&[&'a Record]> {
        self.groups
            .iter()
            .find(|(group_value, _)| *group_value == value)
            .map(|(_, group)| group.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partitions `dataset` by the value each record has for `feature`.
pub fn split_by_feature<'a, R: Borrow<Record>>(dataset: &'a [R], feature: Feature) -> Split<'a> {
    let mut groups: Vec<(&'a str, Vec<&'a Record>)> = Vec::new();
    for item in dataset {
        let record: &'a Record = item.borrow();
        let value = record.value(feature);
        match groups.iter_mut().find(|(group_value, _)| *group_value == value) {
            Some((_, group)) => group.push(record),
            None => groups.push((value, vec![record])),
        }
    }
    Split { feature, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebrities_is_valid() {
        let roster = Roster::celebrities();
        assert_eq!(roster.len(), 10);
        assert!(Roster::new(roster.records().to_vec()).is_ok());
        assert_eq!(roster.find("Michael Jordan").unwrap().label, Label::Sports);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(Roster::new(vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_single_class() {
        let records = vec![
            Record::new("A", "actor", "high", "90s", Label::Entertainment),
            Record::new("B", "musician", "low", "90s", Label::Entertainment),
        ];
        assert!(Roster::new(records).is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let records = vec![
            Record::new("A", "actor", "high", "90s", Label::Entertainment),
            Record::new("A", "athlete", "high", "90s", Label::Sports),
        ];
        assert!(Roster::new(records).is_err());
    }

    #[test]
    fn test_from_reader() {
        let data = "name,profession,fame,era,label\n\
                    Usain Bolt, athlete, high, 2000s, 1\n\
                    Adele, musician, high, 2010s, 0\n";
        let roster = Roster::from_reader(data.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.records()[0].profession, "athlete");
        assert_eq!(roster.records()[1].label, Label::Entertainment);
    }

    #[test]
    fn test_from_reader_rejects_bad_label() {
        let data = "name,profession,fame,era,label\n\
                    Usain Bolt,athlete,high,2000s,3\n\
                    Adele,musician,high,2010s,0\n";
        assert!(Roster::from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_split_by_feature_partitions_dataset() {
        let roster = Roster::celebrities();
        for feature in Feature::ALL {
            let split = split_by_feature(roster.records(), feature);
            let total: usize = split.groups().iter().map(|(_, group)| group.len()).sum();
            assert_eq!(total, roster.len());

            for record in roster.records() {
                let containing = split
                    .groups()
                    .iter()
                    .filter(|(_, group)| group.iter().any(|r| std::ptr::eq(*r, record)))
                    .count();
                assert_eq!(containing, 1);
            }
            for (value, group) in split.groups() {
                assert!(!group.is_empty());
                assert!(group.iter().all(|r| r.value(feature) == *value));
            }
        }
    }

    #[test]
    fn test_split_by_feature_keeps_first_seen_order() {
        let roster = Roster::celebrities();
        let split = split_by_feature(roster.records(), Feature::Era);
        let values: Vec<_> = split.groups().iter().map(|(value, _)| *value).collect();
        assert_eq!(values, vec!["2000s", "2010s", "90s", "2020s"]);

        let nineties: Vec<_> = split.get("90s").unwrap().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(nineties, vec!["Denzel Washington", "Michael Jordan"]);
        assert!(split.get("80s").is_none());
    }

    #[test]
    fn test_split_of_subset() {
        let roster = Roster::celebrities();
        let athletes: Vec<&Record> = roster
            .records()
            .iter()
            .filter(|r| r.profession == "athlete")
            .collect();
        let split = split_by_feature(&athletes, Feature::Fame);
        assert_eq!(split.len(), 2);
        assert_eq!(split.get("high").unwrap().len(), 3);
    }
}
