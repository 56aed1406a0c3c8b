//! The Intcode computer shared by days 2, 5 and 9 (and by most of the
//! even-numbered days later in the year). Additions here must stay
//! backwards-compatible with every day that runs a program:
//! day 2 pokes memory directly and reads cell 0 back, day 5 feeds input and
//! checks outputs, day 9 relies on relative mode and extended memory.

use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct Computer {
    mem: Vec<i64>,
    /// Memory beyond the base program, zero until written.
    ext: HashMap<usize, i64>,
    pc: usize,
    rel_base: i64,
    inputs: VecDeque<i64>,
}

impl Computer {
    /// Parses a program, tolerating line breaks after commas (some published
    /// programs are wrapped).
    pub fn parse(input: &str) -> Self {
        let mem = input
            .trim()
            .split(',')
            .map(|cell| {
                cell.trim()
                    .parse()
                    .unwrap_or_else(|_| panic!("bad intcode cell {cell:?}"))
            })
            .collect();
        Self {
            mem,
            ..Self::default()
        }
    }

    pub fn mem(&self, addr: usize) -> i64 {
        if addr < self.mem.len() {
            self.mem[addr]
        } else {
            self.ext.get(&addr).copied().unwrap_or(0)
        }
    }

    pub fn set_mem(&mut self, addr: usize, value: i64) {
        if addr < self.mem.len() {
            self.mem[addr] = value;
        } else {
            self.ext.insert(addr, value);
        }
    }

    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    pub fn with_input(mut self, value: i64) -> Self {
        self.push_input(value);
        self
    }

    fn mode(&self, arg: u32) -> i64 {
        self.mem(self.pc) / 10i64.pow(arg + 1) % 10
    }

    fn read_param(&self, arg: u32) -> i64 {
        let value = self.mem(self.pc + arg as usize);
        match self.mode(arg) {
            0 => self.mem(to_addr(value)),
            1 => value,
            2 => self.mem(to_addr(self.rel_base + value)),
            mode => panic!("unknown parameter mode {mode}"),
        }
    }

    fn write_addr(&self, arg: u32) -> usize {
        let value = self.mem(self.pc + arg as usize);
        match self.mode(arg) {
            0 => to_addr(value),
            2 => to_addr(self.rel_base + value),
            mode => panic!("parameter mode {mode} is invalid for a write"),
        }
    }

    /// Runs until the next output instruction and returns its value, or
    /// `None` once the program halts.
    pub fn next_output(&mut self) -> Option<i64> {
        loop {
            let opcode = self.mem(self.pc) % 100;
            match opcode {
                1 | 2 | 7 | 8 => {
                    let (a, b) = (self.read_param(1), self.read_param(2));
                    let dest = self.write_addr(3);
                    let value = match opcode {
                        1 => a + b,
                        2 => a * b,
                        7 => i64::from(a < b),
                        _ => i64::from(a == b),
                    };
                    self.set_mem(dest, value);
                    self.pc += 4;
                }
                3 => {
                    let value = self
                        .inputs
                        .pop_front()
                        .unwrap_or_else(|| panic!("input exhausted at position {}", self.pc));
                    let dest = self.write_addr(1);
                    self.set_mem(dest, value);
                    self.pc += 2;
                }
                4 => {
                    let value = self.read_param(1);
                    self.pc += 2;
                    return Some(value);
                }
                5 | 6 => {
                    if (self.read_param(1) != 0) == (opcode == 5) {
                        self.pc = to_addr(self.read_param(2));
                    } else {
                        self.pc += 3;
                    }
                }
                9 => {
                    self.rel_base += self.read_param(1);
                    self.pc += 2;
                }
                99 => return None,
                other => panic!("unknown opcode {other} at position {}", self.pc),
            }
        }
    }

    pub fn outputs(&mut self) -> impl Iterator<Item = i64> + '_ {
        std::iter::from_fn(|| self.next_output())
    }

    /// Runs the program to halt and collects every output.
    pub fn run(&mut self) -> Vec<i64> {
        self.outputs().collect()
    }
}

fn to_addr(value: i64) -> usize {
    usize::try_from(value).unwrap_or_else(|_| panic!("negative memory address {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_program(program: &str, input: impl IntoIterator<Item = i64>) -> Vec<i64> {
        let mut computer = Computer::parse(program);
        for value in input {
            computer.push_input(value);
        }
        computer.run()
    }

    #[test]
    fn add_and_mul() {
        let mut computer = Computer::parse("1,9,10,3,2,3,11,0,99,30,40,50");
        assert_eq!(computer.run(), []);
        assert_eq!(computer.mem(0), 3500);

        let mut computer = Computer::parse("1,1,1,4,99,5,6,0,99");
        computer.run();
        assert_eq!(computer.mem(0), 30);
    }

    #[test]
    fn parameter_modes() {
        let mut computer = Computer::parse("1002,4,3,4,33");
        computer.run();
        assert_eq!(computer.mem(4), 99);
    }

    #[test]
    fn echo() {
        assert_eq!(run_program("3,0,4,0,99", [42]), [42]);
    }

    #[test]
    fn comparisons() {
        // Position-mode equals/less-than against 8.
        assert_eq!(run_program("3,9,8,9,10,9,4,9,99,-1,8", [8]), [1]);
        assert_eq!(run_program("3,9,8,9,10,9,4,9,99,-1,8", [13]), [0]);
        assert_eq!(run_program("3,9,7,9,10,9,4,9,99,-1,8", [7]), [1]);
        assert_eq!(run_program("3,9,7,9,10,9,4,9,99,-1,8", [8]), [0]);
        // Immediate-mode variants.
        assert_eq!(run_program("3,3,1108,-1,8,3,4,3,99", [8]), [1]);
        assert_eq!(run_program("3,3,1107,-1,8,3,4,3,99", [8]), [0]);
    }

    #[test]
    fn jumps() {
        // Outputs 0 iff the input was 0.
        assert_eq!(run_program("3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9", [0]), [0]);
        assert_eq!(run_program("3,3,1105,-1,9,1101,0,0,12,4,12,99,1", [1337]), [1]);
    }

    #[test]
    fn around_eight() {
        let program = indoc::indoc! {"
            3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,
            1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,
            999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99
        "};
        assert_eq!(run_program(program, [7]), [999]);
        assert_eq!(run_program(program, [8]), [1000]);
        assert_eq!(run_program(program, [13]), [1001]);
    }

    #[test]
    fn relative_mode_quine() {
        let program = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
        let quine: Vec<i64> = program.split(',').map(|n| n.parse().unwrap()).collect();
        assert_eq!(run_program(program, []), quine);
    }

    #[test]
    fn large_numbers() {
        assert_eq!(
            run_program("1102,34915192,34915192,7,4,7,99,0", []),
            [1219070632396864]
        );
        assert_eq!(run_program("104,1125899906842624,99", []), [1125899906842624]);
    }
}
