//! Découpage d'un bloc d'alignement en groupes de lignes

/// Caractère de la ligne de marqueurs signalant une mutation
pub const MUTATION_MARKER: char = '.';

/// Nombre de lignes par groupe
pub const GROUP_SIZE: usize = 4;

/// Découpe sur `\n` uniquement ; un `\r` éventuel reste dans la ligne
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Un groupe cible / marqueurs / annotation / requête
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentGroup<'a> {
    /// Index de la ligne cible dans le bloc
    pub start: usize,
    pub target: &'a str,
    pub marker: &'a str,
    pub annotation: &'a str,
    /// Absente quand le bloc s'arrête après l'annotation
    pub query: Option<&'a str>,
}

impl AlignmentGroup<'_> {
    pub fn target_row(&self) -> usize {
        self.start
    }

    pub fn marker_row(&self) -> usize {
        self.start + 1
    }

    pub fn annotation_row(&self) -> usize {
        self.start + 2
    }

    pub fn query_row(&self) -> usize {
        self.start + 3
    }
}

/// Itère sur les groupes tant qu'au moins trois lignes restent
pub struct GroupIter<'l, 'a> {
    lines: &'l [&'a str],
    next: usize,
}

impl<'l, 'a> GroupIter<'l, 'a> {
    pub fn new(lines: &'l [&'a str]) -> Self {
        Self { lines, next: 0 }
    }
}

impl<'a> Iterator for GroupIter<'_, 'a> {
    type Item = AlignmentGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next;
        if start + 2 >= self.lines.len() {
            return None;
        }
        self.next += GROUP_SIZE;

        Some(AlignmentGroup {
            start,
            target: self.lines[start],
            marker: self.lines[start + 1],
            annotation: self.lines[start + 2],
            query: self.lines.get(start + 3).copied(),
        })
    }
}
