//! p–d transition grid.
//!
//! Rows are indexed by the p-level effective quantum number, columns by
//! the d-level one. Cross-sections are in atomic units (bohr²) at
//! 10⁴ m/s; alpha is the velocity exponent.

use super::{InterpolationTable, GRID_COLUMNS};

const PD_ROWS: usize = 18;

/// Row axis: p-level effective principal quantum number.
static ROW_AXIS: [f32; PD_ROWS] = [
    1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1,
    2.2, 2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0,
];

/// Column axis: d-level effective principal quantum number.
static COLUMN_AXIS: [f32; GRID_COLUMNS] = [
    2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0, 3.1,
    3.2, 3.3, 3.4, 3.5, 3.6, 3.7, 3.8, 3.9, 4.0,
];

static SIGMA: [[f32; GRID_COLUMNS]; PD_ROWS] = [
    [
        425.0, 461.0, 507.0, 566.0, 630.0, 706.0, 799.0, 889.0, 995.0,
        1083.0, 1191.0, 1334.0, 1478.0, 1608.0, 1790.0, 1870.0, 1936.0, 2140.0,
    ],
    [
        429.0, 460.0, 505.0, 565.0, 633.0, 704.0, 795.0, 896.0, 985.0,
        1082.0, 1199.0, 1340.0, 1487.0, 1611.0, 1795.0, 1872.0, 1937.0, 2136.0,
    ],
    [
        419.0, 451.0, 501.0, 556.0, 627.0, 700.0, 785.0, 891.0, 977.0,
        1088.0, 1212.0, 1346.0, 1493.0, 1604.0, 1793.0, 1863.0, 1930.0, 2144.0,
    ],
    [
        402.0, 437.0, 489.0, 544.0, 614.0, 695.0, 779.0, 875.0, 975.0,
        1102.0, 1221.0, 1350.0, 1488.0, 1591.0, 1774.0, 1844.0, 1919.0, 2126.0,
    ],
    [
        384.0, 418.0, 467.0, 529.0, 595.0, 674.0, 769.0, 856.0, 976.0,
        1108.0, 1224.0, 1338.0, 1467.0, 1570.0, 1743.0, 1817.0, 1900.0, 2118.0,
    ],
    [
        366.0, 397.0, 443.0, 505.0, 576.0, 651.0, 755.0, 841.0, 973.0,
        1095.0, 1210.0, 1308.0, 1435.0, 1545.0, 1702.0, 1786.0, 1878.0, 2081.0,
    ],
    [
        356.0, 387.0, 432.0, 489.0, 562.0, 635.0, 722.0, 841.0, 961.0,
        1078.0, 1175.0, 1273.0, 1397.0, 1517.0, 1672.0, 1763.0, 1863.0, 2034.0,
    ],
    [
        359.0, 388.0, 431.0, 479.0, 545.0, 624.0, 707.0, 834.0, 943.0,
        1059.0, 1158.0, 1256.0, 1368.0, 1490.0, 1647.0, 1747.0, 1849.0, 1998.0,
    ],
    [
        361.0, 394.0, 436.0, 483.0, 547.0, 615.0, 704.0, 817.0, 920.0,
        1027.0, 1124.0, 1238.0, 1358.0, 1465.0, 1624.0, 1736.0, 1838.0, 1978.0,
    ],
    [
        400.0, 382.0, 440.0, 489.0, 546.0, 610.0, 690.0, 817.0, 897.0,
        998.0, 1115.0, 1201.0, 1351.0, 1453.0, 1599.0, 1728.0, 1829.0, 1953.0,
    ],
    [
        474.0, 461.0, 416.0, 491.0, 549.0, 612.0, 701.0, 806.0, 883.0,
        974.0, 1078.0, 1194.0, 1310.0, 1456.0, 1569.0, 1716.0, 1818.0, 1925.0,
    ],
    [
        531.0, 518.0, 507.0, 463.0, 547.0, 615.0, 694.0, 784.0, 881.0,
        958.0, 1047.0, 1153.0, 1297.0, 1432.0, 1547.0, 1688.0, 1809.0, 1901.0,
    ],
    [
        594.0, 585.0, 577.0, 564.0, 513.0, 615.0, 695.0, 779.0, 879.0,
        949.0, 1041.0, 1145.0, 1264.0, 1388.0, 1544.0, 1644.0, 1804.0, 1879.0,
    ],
    [
        675.0, 659.0, 651.0, 639.0, 632.0, 576.0, 695.0, 782.0, 879.0,
        957.0, 1046.0, 1141.0, 1254.0, 1391.0, 1524.0, 1614.0, 1793.0, 1871.0,
    ],
    [
        739.0, 734.0, 726.0, 719.0, 715.0, 708.0, 663.0, 776.0, 901.0,
        971.0, 1022.0, 1117.0, 1232.0, 1355.0, 1478.0, 1616.0, 1766.0, 1887.0,
    ],
    [
        819.0, 821.0, 805.0, 784.0, 773.0, 761.0, 736.0, 761.0, 888.0,
        958.0, 1044.0, 1145.0, 1237.0, 1346.0, 1487.0, 1614.0, 1721.0, 1891.0,
    ],
    [
        899.0, 895.0, 871.0, 852.0, 856.0, 861.0, 854.0, 759.0, 883.0,
        984.0, 1027.0, 1113.0, 1226.0, 1355.0, 1467.0, 1568.0, 1703.0, 1885.0,
    ],
    [
        973.0, 946.0, 955.0, 925.0, 939.0, 927.0, 902.0, 920.0, 870.0,
        987.0, 1061.0, 1145.0, 1234.0, 1319.0, 1439.0, 1552.0, 1722.0, 1859.0,
    ],
];

static ALPHA: [[f32; GRID_COLUMNS]; PD_ROWS] = [
    [
        0.281, 0.288, 0.283, 0.282, 0.278, 0.281, 0.272, 0.274, 0.268,
        0.257, 0.251, 0.243, 0.246, 0.251, 0.254, 0.268, 0.304, 0.308,
    ],
    [
        0.290, 0.297, 0.291, 0.290, 0.286, 0.282, 0.277, 0.275, 0.267,
        0.254, 0.252, 0.244, 0.250, 0.257, 0.260, 0.274, 0.308, 0.312,
    ],
    [
        0.294, 0.299, 0.293, 0.294, 0.288, 0.289, 0.281, 0.276, 0.265,
        0.256, 0.251, 0.247, 0.258, 0.264, 0.268, 0.283, 0.318, 0.317,
    ],
    [
        0.297, 0.298, 0.302, 0.300, 0.289, 0.295, 0.290, 0.276, 0.264,
        0.256, 0.260, 0.258, 0.268, 0.277, 0.281, 0.292, 0.330, 0.327,
    ],
    [
        0.305, 0.311, 0.313, 0.315, 0.305, 0.304, 0.299, 0.279, 0.271,
        0.272, 0.273, 0.276, 0.285, 0.290, 0.293, 0.302, 0.340, 0.340,
    ],
    [
        0.292, 0.294, 0.303, 0.305, 0.301, 0.307, 0.290, 0.277, 0.274,
        0.278, 0.287, 0.288, 0.295, 0.302, 0.306, 0.312, 0.343, 0.346,
    ],
    [
        0.268, 0.277, 0.279, 0.285, 0.285, 0.290, 0.279, 0.278, 0.280,
        0.283, 0.295, 0.296, 0.305, 0.310, 0.313, 0.315, 0.342, 0.346,
    ],
    [
        0.288, 0.285, 0.280, 0.278, 0.278, 0.277, 0.272, 0.271, 0.279,
        0.288, 0.297, 0.305, 0.310, 0.313, 0.311, 0.310, 0.335, 0.338,
    ],
    [
        0.314, 0.304, 0.292, 0.282, 0.275, 0.275, 0.262, 0.272, 0.290,
        0.293, 0.299, 0.307, 0.308, 0.310, 0.303, 0.302, 0.325, 0.328,
    ],
    [
        0.346, 0.329, 0.313, 0.295, 0.283, 0.275, 0.264, 0.274, 0.288,
        0.302, 0.307, 0.310, 0.306, 0.307, 0.292, 0.296, 0.315, 0.320,
    ],
    [
        0.320, 0.295, 0.326, 0.318, 0.294, 0.277, 0.275, 0.271, 0.293,
        0.303, 0.305, 0.309, 0.309, 0.303, 0.294, 0.294, 0.310, 0.313,
    ],
    [
        0.304, 0.310, 0.297, 0.320, 0.317, 0.297, 0.283, 0.274, 0.298,
        0.305, 0.308, 0.311, 0.313, 0.300, 0.290, 0.293, 0.305, 0.306,
    ],
    [
        0.314, 0.313, 0.308, 0.297, 0.325, 0.314, 0.293, 0.276, 0.292,
        0.309, 0.314, 0.308, 0.303, 0.296, 0.286, 0.291, 0.301, 0.302,
    ],
    [
        0.308, 0.311, 0.307, 0.312, 0.288, 0.340, 0.305, 0.285, 0.294,
        0.310, 0.315, 0.309, 0.296, 0.285, 0.281, 0.288, 0.298, 0.295,
    ],
    [
        0.313, 0.310, 0.315, 0.303, 0.313, 0.294, 0.331, 0.286, 0.294,
        0.307, 0.320, 0.316, 0.303, 0.281, 0.278, 0.285, 0.290, 0.292,
    ],
    [
        0.315, 0.306, 0.308, 0.297, 0.295, 0.283, 0.334, 0.297, 0.280,
        0.294, 0.314, 0.321, 0.313, 0.291, 0.280, 0.279, 0.287, 0.290,
    ],
    [
        0.308, 0.304, 0.305, 0.297, 0.279, 0.285, 0.251, 0.278, 0.278,
        0.284, 0.297, 0.314, 0.307, 0.289, 0.274, 0.274, 0.274, 0.291,
    ],
    [
        0.301, 0.299, 0.298, 0.285, 0.265, 0.279, 0.241, 0.285, 0.260,
        0.286, 0.302, 0.306, 0.302, 0.288, 0.277, 0.263, 0.271, 0.293,
    ],
];

/// Table for p–d transitions, see [`InterpolationTable`].
pub static PD_TABLE: InterpolationTable = InterpolationTable {
    name: "p-d",
    row_orbital: 1,
    column_orbital: 2,
    row_axis: &ROW_AXIS,
    column_axis: &COLUMN_AXIS,
    sigma: &SIGMA,
    alpha: &ALPHA,
};
