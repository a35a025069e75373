/// Binary operators available to the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Mul,
    Add,
    Sub,
    Div,
}

impl Operator {
    /// Exploration order used by the search engine. Changing it changes which
    /// exact solution is reported first.
    pub const ALL: [Operator; 4] = [Operator::Mul, Operator::Add, Operator::Sub, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Mul => '*',
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Div => '/',
        }
    }
}

/// Cache key: an ordered operand pair plus the operator applied to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationKey {
    pub left: u64,
    pub right: u64,
    pub operator: Operator,
}

impl OperationKey {
    pub fn new(left: u64, right: u64, operator: Operator) -> Self {
        Self {
            left,
            right,
            operator,
        }
    }
}

/// One recorded combination: `left operator right = result`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStep {
    left: u64,
    right: u64,
    operator: Operator,
    result: u64,
}

impl OperationStep {
    pub fn new(left: u64, right: u64, operator: Operator, result: u64) -> Self {
        Self {
            left,
            right,
            operator,
            result,
        }
    }

    pub fn left(&self) -> u64 {
        self.left
    }

    pub fn right(&self) -> u64 {
        self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn result(&self) -> u64 {
        self.result
    }

    pub fn key(&self) -> OperationKey {
        OperationKey::new(self.left, self.right, self.operator)
    }
}
