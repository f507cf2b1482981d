//! std140 布局测试夹具
//!
//! 为 uniform buffer 的 std140 布局测试生成伪随机字段列表。每个
//! (group, case) 组合用固定种子播种，重跑得到完全相同的序列，
//! 不需要在磁盘上保存任何状态。字段数量随组号递增，覆盖从小结构体
//! 到大结构体的布局边界。

use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;

/// Number of generated test groups (one output file per group).
pub const GROUP_COUNT: u32 = 30;
/// Number of cases inside each group.
pub const CASES_PER_GROUP: u32 = 30;
/// Base value for the per-(group, case) RNG seed.
const SEED_BASE: u64 = 12345;

const SCALAR_TYPES: [&str; 5] = ["int", "uint", "float", "bool", "double"];
const VECTOR_PREFIXES: [&str; 5] = ["vec", "ivec", "uvec", "bvec", "dvec"];
const MATRIX_PREFIXES: [&str; 2] = ["mat", "dmat"];

// ============================================================================
// Context types (serialized into the std140 test template)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureField {
    pub name: String,
    /// GLSL type name (`float`, `ivec3`, `dmat2x4`, …)
    #[serde(rename = "type")]
    pub ty: String,
    /// Value-access expression touching the field in generated C++
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureCase {
    pub name: String,
    pub fields: Vec<FixtureField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureGroup {
    pub name: String,
    pub tests: Vec<FixtureCase>,
}

// ============================================================================
// Generation
// ============================================================================

fn pick<'a>(rng: &mut StdRng, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

/// 三路分派：标量、向量、矩阵 (矩阵一半带第二维)。
fn random_type(rng: &mut StdRng) -> String {
    match rng.random_range(0..3) {
        0 => pick(rng, &SCALAR_TYPES).to_string(),
        1 => format!("{}{}", pick(rng, &VECTOR_PREFIXES), rng.random_range(2..=4)),
        _ => {
            let prefix = pick(rng, &MATRIX_PREFIXES);
            let cols = rng.random_range(2..=4);
            if rng.random_range(0..2) == 0 {
                format!("{prefix}{cols}")
            } else {
                format!("{prefix}{cols}x{}", rng.random_range(2..=4))
            }
        }
    }
}

/// 按类型名分派取值表达式：向量取 `.x`，矩阵取 `[0][0]`，标量直取。
fn touch_access(ty: &str, var: &str) -> String {
    if ty.contains("vec") {
        format!("float({var}.x)")
    } else if ty.contains("mat") {
        format!("float({var}[0][0])")
    } else {
        format!("float({var})")
    }
}

/// One deterministic case: `group + 3` fields named `f0…`, freshly seeded
/// from the (group, case) pair.
#[must_use]
pub fn fixture_case(group: u32, case: u32) -> FixtureCase {
    let seed = SEED_BASE + u64::from(group) * 1000 + u64::from(case);
    let mut rng = StdRng::seed_from_u64(seed);

    let fields = (0..group + 3)
        .map(|f| {
            let ty = random_type(&mut rng);
            let name = format!("f{f}");
            let access = touch_access(&ty, &name);
            FixtureField { name, ty, access }
        })
        .collect();

    FixtureCase {
        name: format!("Test_{group}_{case}"),
        fields,
    }
}

/// The full context for one group's output file.
#[must_use]
pub fn fixture_group(group: u32) -> FixtureGroup {
    FixtureGroup {
        name: format!("Test{group}"),
        tests: (0..CASES_PER_GROUP).map(|case| fixture_case(group, case)).collect(),
    }
}
