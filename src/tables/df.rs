//! d–f transition grid.
//!
//! Rows are indexed by the d-level effective quantum number, columns by
//! the f-level one. Cross-sections are in atomic units (bohr²) at
//! 10⁴ m/s; alpha is the velocity exponent.

use super::{InterpolationTable, GRID_COLUMNS};

const DF_ROWS: usize = 18;

/// Row axis: d-level effective principal quantum number.
static ROW_AXIS: [f32; DF_ROWS] = [
    2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0, 3.1,
    3.2, 3.3, 3.4, 3.5, 3.6, 3.7, 3.8, 3.9, 4.0,
];

/// Column axis: f-level effective principal quantum number.
static COLUMN_AXIS: [f32; GRID_COLUMNS] = [
    3.3, 3.4, 3.5, 3.6, 3.7, 3.8, 3.9, 4.0, 4.1,
    4.2, 4.3, 4.4, 4.5, 4.6, 4.7, 4.8, 4.9, 5.0,
];

static SIGMA: [[f32; GRID_COLUMNS]; DF_ROWS] = [
    [
        808.0, 873.0, 958.0, 1059.0, 1175.0, 1306.0, 1453.0, 1615.0, 1793.0,
        1979.0, 2121.0, 2203.0, 2461.0, 2604.0, 2764.0, 2757.0, 2784.0, 3156.0,
    ],
    [
        798.0, 866.0, 953.0, 1052.0, 1172.0, 1299.0, 1450.0, 1606.0, 1776.0,
        1967.0, 2114.0, 2196.0, 2451.0, 2601.0, 2763.0, 2767.0, 2783.0, 3142.0,
    ],
    [
        781.0, 848.0, 934.0, 1030.0, 1149.0, 1276.0, 1416.0, 1596.0, 1751.0,
        1944.0, 2100.0, 2188.0, 2436.0, 2594.0, 2767.0, 2777.0, 2795.0, 3123.0,
    ],
    [
        766.0, 831.0, 915.0, 1010.0, 1124.0, 1239.0, 1398.0, 1564.0, 1729.0,
        1912.0, 2083.0, 2180.0, 2426.0, 2585.0, 2776.0, 2790.0, 2808.0, 3106.0,
    ],
    [
        750.0, 814.0, 897.0, 987.0, 1097.0, 1201.0, 1355.0, 1530.0, 1718.0,
        1875.0, 2060.0, 2171.0, 2414.0, 2575.0, 2779.0, 2809.0, 2820.0, 3103.0,
    ],
    [
        733.0, 797.0, 872.0, 950.0, 1049.0, 1166.0, 1326.0, 1502.0, 1670.0,
        1851.0, 2026.0, 2165.0, 2396.0, 2562.0, 2779.0, 2827.0, 2832.0, 3099.0,
    ],
    [
        726.0, 786.0, 853.0, 936.0, 1011.0, 1128.0, 1303.0, 1472.0, 1649.0,
        1844.0, 1979.0, 2159.0, 2371.0, 2548.0, 2778.0, 2840.0, 2848.0, 3103.0,
    ],
    [
        709.0, 783.0, 847.0, 912.0, 1002.0, 1093.0, 1270.0, 1419.0, 1606.0,
        1787.0, 1951.0, 2139.0, 2335.0, 2533.0, 2775.0, 2847.0, 2863.0, 3104.0,
    ],
    [
        758.0, 721.0, 838.0, 907.0, 1010.0, 1066.0, 1211.0, 1401.0, 1600.0,
        1774.0, 1972.0, 2098.0, 2313.0, 2528.0, 2781.0, 2857.0, 2892.0, 3121.0,
    ],
    [
        869.0, 882.0, 820.0, 870.0, 1003.0, 1098.0, 1165.0, 1368.0, 1527.0,
        1735.0, 1896.0, 2030.0, 2288.0, 2534.0, 2776.0, 2844.0, 2902.0, 3123.0,
    ],
    [
        970.0, 967.0, 934.0, 938.0, 918.0, 1130.0, 1194.0, 1287.0, 1507.0,
        1679.0, 1821.0, 2021.0, 2271.0, 2525.0, 2732.0, 2786.0, 2882.0, 3085.0,
    ],
    [
        1079.0, 1043.0, 1056.0, 1007.0, 1014.0, 1021.0, 1200.0, 1326.0, 1424.0,
        1668.0, 1818.0, 1988.0, 2242.0, 2493.0, 2672.0, 2719.0, 2853.0, 3035.0,
    ],
    [
        1174.0, 1173.0, 1127.0, 1154.0, 1104.0, 1099.0, 1169.0, 1288.0, 1442.0,
        1580.0, 1704.0, 1882.0, 2136.0, 2400.0, 2561.0, 2648.0, 2832.0, 2994.0,
    ],
    [
        1285.0, 1278.0, 1269.0, 1225.0, 1252.0, 1229.0, 1116.0, 1343.0, 1380.0,
        1594.0, 1710.0, 1874.0, 2054.0, 2309.0, 2484.0, 2607.0, 2813.0, 2932.0,
    ],
    [
        1440.0, 1408.0, 1422.0, 1380.0, 1383.0, 1341.0, 1361.0, 1192.0, 1448.0,
        1454.0, 1675.0, 1873.0, 2069.0, 2246.0, 2432.0, 2610.0, 2811.0, 2878.0,
    ],
    [
        1572.0, 1545.0, 1553.0, 1517.0, 1481.0, 1502.0, 1469.0, 1349.0, 1373.0,
        1561.0, 1586.0, 1781.0, 2072.0, 2301.0, 2490.0, 2626.0, 2754.0, 2832.0,
    ],
    [
        1698.0, 1701.0, 1694.0, 1641.0, 1617.0, 1651.0, 1566.0, 1600.0, 1374.0,
        1547.0, 1698.0, 1749.0, 1989.0, 2289.0, 2511.0, 2594.0, 2689.0, 2774.0,
    ],
    [
        1870.0, 1841.0, 1786.0, 1752.0, 1777.0, 1757.0, 1666.0, 1732.0, 1522.0,
        1533.0, 1707.0, 1817.0, 1928.0, 2194.0, 2435.0, 2574.0, 2665.0, 2742.0,
    ],
];

static ALPHA: [[f32; GRID_COLUMNS]; DF_ROWS] = [
    [
        0.295, 0.286, 0.299, 0.300, 0.307, 0.310, 0.311, 0.311, 0.316,
        0.319, 0.325, 0.351, 0.364, 0.369, 0.372, 0.379, 0.373, 0.351,
    ],
    [
        0.295, 0.295, 0.301, 0.302, 0.311, 0.316, 0.314, 0.314, 0.320,
        0.321, 0.324, 0.349, 0.361, 0.365, 0.368, 0.374, 0.368, 0.349,
    ],
    [
        0.286, 0.298, 0.302, 0.304, 0.311, 0.323, 0.321, 0.319, 0.324,
        0.323, 0.323, 0.345, 0.355, 0.358, 0.362, 0.367, 0.361, 0.343,
    ],
    [
        0.290, 0.295, 0.307, 0.316, 0.322, 0.329, 0.326, 0.325, 0.329,
        0.324, 0.321, 0.343, 0.350, 0.351, 0.354, 0.360, 0.358, 0.337,
    ],
    [
        0.292, 0.299, 0.307, 0.321, 0.327, 0.336, 0.333, 0.330, 0.330,
        0.320, 0.321, 0.338, 0.344, 0.344, 0.345, 0.352, 0.352, 0.332,
    ],
    [
        0.291, 0.299, 0.309, 0.323, 0.335, 0.339, 0.335, 0.333, 0.327,
        0.323, 0.319, 0.333, 0.336, 0.336, 0.336, 0.344, 0.345, 0.329,
    ],
    [
        0.297, 0.302, 0.312, 0.321, 0.340, 0.338, 0.333, 0.327, 0.325,
        0.319, 0.318, 0.324, 0.329, 0.330, 0.330, 0.336, 0.337, 0.325,
    ],
    [
        0.319, 0.314, 0.317, 0.327, 0.334, 0.344, 0.339, 0.327, 0.323,
        0.318, 0.312, 0.318, 0.319, 0.322, 0.322, 0.326, 0.327, 0.316,
    ],
    [
        0.333, 0.328, 0.339, 0.325, 0.359, 0.351, 0.332, 0.325, 0.322,
        0.311, 0.309, 0.310, 0.311, 0.316, 0.314, 0.317, 0.321, 0.313,
    ],
    [
        0.274, 0.273, 0.323, 0.412, 0.318, 0.339, 0.359, 0.328, 0.324,
        0.311, 0.309, 0.325, 0.322, 0.315, 0.318, 0.319, 0.325, 0.314,
    ],
    [
        0.297, 0.296, 0.273, 0.302, 0.436, 0.325, 0.354, 0.335, 0.326,
        0.311, 0.314, 0.330, 0.323, 0.324, 0.325, 0.323, 0.330, 0.314,
    ],
    [
        0.284, 0.295, 0.296, 0.280, 0.300, 0.438, 0.322, 0.348, 0.332,
        0.318, 0.320, 0.332, 0.335, 0.334, 0.335, 0.331, 0.333, 0.309,
    ],
    [
        0.280, 0.278, 0.285, 0.297, 0.279, 0.320, 0.445, 0.319, 0.320,
        0.324, 0.328, 0.338, 0.348, 0.346, 0.345, 0.336, 0.328, 0.300,
    ],
    [
        0.280, 0.273, 0.267, 0.273, 0.284, 0.268, 0.343, 0.390, 0.323,
        0.308, 0.318, 0.325, 0.343, 0.348, 0.346, 0.337, 0.311, 0.286,
    ],
    [
        0.277, 0.270, 0.260, 0.266, 0.276, 0.263, 0.294, 0.408, 0.337,
        0.324, 0.299, 0.308, 0.331, 0.334, 0.345, 0.327, 0.315, 0.280,
    ],
    [
        0.270, 0.262, 0.258, 0.260, 0.273, 0.273, 0.262, 0.375, 0.410,
        0.298, 0.312, 0.294, 0.313, 0.331, 0.328, 0.322, 0.307, 0.270,
    ],
    [
        0.271, 0.267, 0.262, 0.264, 0.274, 0.269, 0.261, 0.323, 0.351,
        0.359, 0.294, 0.325, 0.310, 0.318, 0.321, 0.315, 0.291, 0.268,
    ],
    [
        0.275, 0.276, 0.272, 0.276, 0.279, 0.270, 0.264, 0.295, 0.393,
        0.340, 0.319, 0.287, 0.320, 0.330, 0.316, 0.302, 0.280, 0.261,
    ],
];

/// Table for d–f transitions, see [`InterpolationTable`].
pub static DF_TABLE: InterpolationTable = InterpolationTable {
    name: "d-f",
    row_orbital: 2,
    column_orbital: 3,
    row_axis: &ROW_AXIS,
    column_axis: &COLUMN_AXIS,
    sigma: &SIGMA,
    alpha: &ALPHA,
};
