use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// `w:tab/@w:val`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKind {
    Clear,
    Left,
    Center,
    Right,
    Decimal,
    Bar,
    Num,
}

impl TabKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TabKind::Clear => "clear",
            TabKind::Left => "left",
            TabKind::Center => "center",
            TabKind::Right => "right",
            TabKind::Decimal => "decimal",
            TabKind::Bar => "bar",
            TabKind::Num => "num",
        }
    }
}

impl FromStr for TabKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(TabKind::Clear),
            "left" | "start" => Ok(TabKind::Left),
            "center" => Ok(TabKind::Center),
            "right" | "end" => Ok(TabKind::Right),
            "decimal" => Ok(TabKind::Decimal),
            "bar" => Ok(TabKind::Bar),
            "num" => Ok(TabKind::Num),
            other => Err(Error::InvalidStyleValue(format!("unknown tab stop type '{other}'"))),
        }
    }
}

/// `w:tab/@w:leader`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabLeader {
    None,
    Dot,
    Hyphen,
    Underscore,
    Heavy,
    MiddleDot,
}

impl TabLeader {
    pub fn as_str(self) -> &'static str {
        match self {
            TabLeader::None => "none",
            TabLeader::Dot => "dot",
            TabLeader::Hyphen => "hyphen",
            TabLeader::Underscore => "underscore",
            TabLeader::Heavy => "heavy",
            TabLeader::MiddleDot => "middleDot",
        }
    }
}

impl FromStr for TabLeader {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TabLeader::None),
            "dot" => Ok(TabLeader::Dot),
            "hyphen" => Ok(TabLeader::Hyphen),
            "underscore" => Ok(TabLeader::Underscore),
            "heavy" => Ok(TabLeader::Heavy),
            "middleDot" => Ok(TabLeader::MiddleDot),
            other => Err(Error::InvalidStyleValue(format!("unknown tab leader '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabStop {
    pub kind: TabKind,
    pub position: i32, // twips from the leading edge
    pub leader: Option<TabLeader>,
}

impl TabStop {
    pub fn new(kind: TabKind, position: i32) -> Self {
        TabStop { kind, position, leader: None }
    }

    pub fn with_leader(mut self, leader: TabLeader) -> Self {
        self.leader = Some(leader);
        self
    }
}

impl fmt::Display for TabStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.position)?;
        if let Some(leader) = self.leader {
            write!(f, ":{}", leader.as_str())?;
        }
        Ok(())
    }
}

/// Parses the `kind:position[:leader]` form used on the command line.
impl FromStr for TabStop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let kind = parts.next().unwrap_or_default().trim().parse::<TabKind>()?;
        let position = parts
            .next()
            .and_then(|p| p.trim().parse::<i32>().ok())
            .ok_or_else(|| Error::InvalidStyleValue(format!("tab stop '{s}' needs a position")))?;
        let leader = parts.next().map(|l| l.trim().parse::<TabLeader>()).transpose()?;
        if parts.next().is_some() {
            return Err(Error::InvalidStyleValue(format!("too many fields in tab stop '{s}'")));
        }
        Ok(TabStop { kind, position, leader })
    }
}

/// Ordered set of custom tab stops for a paragraph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tabs {
    stops: Vec<TabStop>,
}

impl Tabs {
    pub fn new(stops: Vec<TabStop>) -> Self {
        Tabs { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabStop> {
        self.stops.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabStop> {
        self.stops.iter()
    }
}

impl<'a> IntoIterator for &'a Tabs {
    type Item = &'a TabStop;
    type IntoIter = std::slice::Iter<'a, TabStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
