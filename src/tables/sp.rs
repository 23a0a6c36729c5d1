//! s–p transition grid.
//!
//! Rows are indexed by the s-level effective quantum number, columns by
//! the p-level one. Cross-sections are in atomic units (bohr²) at
//! 10⁴ m/s; alpha is the velocity exponent.

use super::{InterpolationTable, GRID_COLUMNS};

const SP_ROWS: usize = 21;

/// Row axis: s-level effective principal quantum number.
static ROW_AXIS: [f32; SP_ROWS] = [
    1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8,
    1.9, 2.0, 2.1, 2.2, 2.3, 2.4, 2.5, 2.6, 2.7,
    2.8, 2.9, 3.0,
];

/// Column axis: p-level effective principal quantum number.
static COLUMN_AXIS: [f32; GRID_COLUMNS] = [
    1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.1,
    2.2, 2.3, 2.4, 2.5, 2.6, 2.7, 2.8, 2.9, 3.0,
];

static SIGMA: [[f32; GRID_COLUMNS]; SP_ROWS] = [
    [
        126.0, 140.0, 165.0, 202.0, 247.0, 299.0, 346.0, 383.0, 435.0,
        491.0, 553.0, 617.0, 685.0, 769.0, 838.0, 925.0, 1011.0, 1082.0,
    ],
    [
        140.0, 150.0, 162.0, 183.0, 218.0, 273.0, 327.0, 385.0, 440.0,
        501.0, 557.0, 620.0, 701.0, 764.0, 838.0, 923.0, 1025.0, 1085.0,
    ],
    [
        154.0, 167.0, 175.0, 192.0, 216.0, 251.0, 299.0, 357.0, 423.0,
        487.0, 549.0, 617.0, 684.0, 759.0, 834.0, 910.0, 1014.0, 1064.0,
    ],
    [
        166.0, 180.0, 192.0, 206.0, 226.0, 253.0, 291.0, 339.0, 397.0,
        459.0, 532.0, 600.0, 676.0, 755.0, 832.0, 896.0, 1002.0, 1055.0,
    ],
    [
        208.0, 194.0, 207.0, 223.0, 242.0, 265.0, 296.0, 335.0, 384.0,
        445.0, 511.0, 583.0, 656.0, 726.0, 817.0, 889.0, 988.0, 1044.0,
    ],
    [
        262.0, 254.0, 220.0, 239.0, 261.0, 283.0, 310.0, 344.0, 388.0,
        442.0, 496.0, 568.0, 635.0, 725.0, 791.0, 890.0, 970.0, 1036.0,
    ],
    [
        311.0, 306.0, 299.0, 251.0, 280.0, 304.0, 330.0, 361.0, 396.0,
        443.0, 500.0, 563.0, 630.0, 704.0, 796.0, 880.0, 951.0, 1033.0,
    ],
    [
        358.0, 359.0, 350.0, 338.0, 293.0, 323.0, 352.0, 381.0, 416.0,
        455.0, 511.0, 566.0, 635.0, 706.0, 780.0, 859.0, 946.0, 1039.0,
    ],
    [
        411.0, 409.0, 405.0, 392.0, 370.0, 340.0, 375.0, 406.0, 439.0,
        478.0, 525.0, 580.0, 644.0, 714.0, 790.0, 873.0, 961.0, 1050.0,
    ],
    [
        462.0, 463.0, 459.0, 450.0, 443.0, 400.0, 394.0, 432.0, 467.0,
        501.0, 546.0, 595.0, 650.0, 711.0, 786.0, 873.0, 963.0, 1050.0,
    ],
    [
        522.0, 525.0, 529.0, 524.0, 516.0, 518.0, 438.0, 454.0, 495.0,
        532.0, 565.0, 621.0, 671.0, 741.0, 813.0, 874.0, 951.0, 1034.0,
    ],
    [
        589.0, 593.0, 590.0, 583.0, 579.0, 568.0, 565.0, 483.0, 517.0,
        560.0, 600.0, 644.0, 691.0, 752.0, 821.0, 904.0, 978.0, 1048.0,
    ],
    [
        658.0, 655.0, 666.0, 657.0, 649.0, 653.0, 649.0, 587.0, 549.0,
        592.0, 674.0, 674.0, 728.0, 782.0, 833.0, 902.0, 992.0, 1084.0,
    ],
    [
        738.0, 742.0, 747.0, 725.0, 721.0, 729.0, 699.0, 730.0, 626.0,
        622.0, 668.0, 721.0, 765.0, 809.0, 887.0, 938.0, 1001.0, 1109.0,
    ],
    [
        838.0, 838.0, 810.0, 809.0, 790.0, 800.0, 769.0, 815.0, 757.0,
        679.0, 704.0, 755.0, 806.0, 854.0, 901.0, 974.0, 1034.0, 1105.0,
    ],
    [
        942.0, 946.0, 925.0, 901.0, 918.0, 895.0, 919.0, 897.0, 933.0,
        890.0, 785.0, 797.0, 859.0, 908.0, 976.0, 1020.0, 1115.0, 1173.0,
    ],
    [
        1059.0, 1061.0, 1056.0, 1061.0, 1074.0, 1031.0, 1036.0, 1036.0, 993.0,
        1038.0, 932.0, 852.0, 878.0, 943.0, 1003.0, 1074.0, 1131.0, 1200.0,
    ],
    [
        1069.0, 1076.0, 1083.0, 1095.0, 1102.0, 1091.0, 1126.0, 1156.0, 1103.0,
        1149.0, 1157.0, 1036.0, 972.0, 1007.0, 1064.0, 1124.0, 1209.0, 1283.0,
    ],
    [
        1338.0, 1350.0, 1356.0, 1354.0, 1324.0, 1301.0, 1312.0, 1318.0, 1257.0,
        1239.0, 1297.0, 1233.0, 1089.0, 1059.0, 1106.0, 1180.0, 1218.0, 1317.0,
    ],
    [
        1409.0, 1398.0, 1367.0, 1336.0, 1313.0, 1313.0, 1409.0, 1354.0, 1317.0,
        1287.0, 1353.0, 1386.0, 1279.0, 1158.0, 1141.0, 1188.0, 1260.0, 1335.0,
    ],
    [
        1328.0, 1332.0, 1342.0, 1369.0, 1405.0, 1451.0, 1502.0, 1524.0, 1506.0,
        1477.0, 1522.0, 1594.0, 1572.0, 1436.0, 1328.0, 1325.0, 1382.0, 1446.0,
    ],
];

static ALPHA: [[f32; GRID_COLUMNS]; SP_ROWS] = [
    [
        0.268, 0.269, 0.335, 0.377, 0.327, 0.286, 0.273, 0.270, 0.271,
        0.268, 0.267, 0.264, 0.264, 0.264, 0.261, 0.256, 0.248, 0.245,
    ],
    [
        0.261, 0.256, 0.254, 0.282, 0.327, 0.355, 0.321, 0.293, 0.287,
        0.271, 0.267, 0.272, 0.270, 0.270, 0.268, 0.268, 0.264, 0.263,
    ],
    [
        0.266, 0.264, 0.257, 0.252, 0.267, 0.289, 0.325, 0.339, 0.319,
        0.301, 0.292, 0.284, 0.281, 0.281, 0.277, 0.282, 0.276, 0.274,
    ],
    [
        0.262, 0.274, 0.258, 0.251, 0.247, 0.254, 0.273, 0.291, 0.316,
        0.322, 0.320, 0.302, 0.294, 0.290, 0.287, 0.292, 0.283, 0.277,
    ],
    [
        0.322, 0.275, 0.264, 0.259, 0.250, 0.245, 0.273, 0.255, 0.271,
        0.284, 0.294, 0.308, 0.296, 0.299, 0.288, 0.289, 0.282, 0.278,
    ],
    [
        0.267, 0.300, 0.260, 0.268, 0.245, 0.242, 0.243, 0.242, 0.239,
        0.246, 0.267, 0.277, 0.280, 0.290, 0.282, 0.281, 0.274, 0.271,
    ],
    [
        0.259, 0.274, 0.275, 0.252, 0.265, 0.248, 0.249, 0.237, 0.238,
        0.236, 0.247, 0.254, 0.254, 0.271, 0.268, 0.267, 0.258, 0.262,
    ],
    [
        0.260, 0.255, 0.268, 0.268, 0.268, 0.264, 0.248, 0.239, 0.229,
        0.240, 0.236, 0.234, 0.238, 0.244, 0.252, 0.251, 0.244, 0.255,
    ],
    [
        0.255, 0.255, 0.244, 0.247, 0.317, 0.246, 0.255, 0.244, 0.237,
        0.231, 0.227, 0.231, 0.235, 0.232, 0.235, 0.241, 0.237, 0.245,
    ],
    [
        0.256, 0.254, 0.254, 0.249, 0.227, 0.319, 0.253, 0.253, 0.240,
        0.237, 0.238, 0.233, 0.231, 0.230, 0.228, 0.234, 0.227, 0.241,
    ],
    [
        0.257, 0.254, 0.252, 0.235, 0.253, 0.240, 0.284, 0.251, 0.246,
        0.241, 0.235, 0.228, 0.222, 0.225, 0.225, 0.219, 0.228, 0.233,
    ],
    [
        0.244, 0.240, 0.245, 0.238, 0.248, 0.230, 0.283, 0.252, 0.244,
        0.244, 0.238, 0.235, 0.234, 0.236, 0.228, 0.224, 0.225, 0.231,
    ],
    [
        0.244, 0.241, 0.244, 0.237, 0.237, 0.249, 0.219, 0.324, 0.239,
        0.245, 0.242, 0.242, 0.232, 0.233, 0.221, 0.227, 0.231, 0.218,
    ],
    [
        0.241, 0.245, 0.249, 0.239, 0.243, 0.250, 0.217, 0.254, 0.308,
        0.237, 0.247, 0.244, 0.234, 0.228, 0.233, 0.224, 0.227, 0.226,
    ],
    [
        0.243, 0.243, 0.232, 0.227, 0.235, 0.253, 0.227, 0.220, 0.320,
        0.270, 0.243, 0.252, 0.248, 0.238, 0.234, 0.241, 0.225, 0.227,
    ],
    [
        0.225, 0.226, 0.234, 0.230, 0.226, 0.233, 0.249, 0.225, 0.216,
        0.300, 0.286, 0.237, 0.240, 0.247, 0.243, 0.234, 0.231, 0.238,
    ],
    [
        0.268, 0.260, 0.247, 0.238, 0.233, 0.241, 0.254, 0.248, 0.207,
        0.227, 0.315, 0.260, 0.226, 0.237, 0.240, 0.239, 0.239, 0.240,
    ],
    [
        0.248, 0.246, 0.238, 0.226, 0.213, 0.221, 0.226, 0.226, 0.204,
        0.194, 0.248, 0.316, 0.234, 0.216, 0.236, 0.233, 0.221, 0.230,
    ],
    [
        0.200, 0.202, 0.198, 0.194, 0.206, 0.207, 0.227, 0.224, 0.207,
        0.185, 0.198, 0.275, 0.315, 0.233, 0.229, 0.231, 0.233, 0.236,
    ],
    [
        0.202, 0.209, 0.221, 0.226, 0.230, 0.245, 0.202, 0.257, 0.246,
        0.225, 0.215, 0.246, 0.320, 0.321, 0.244, 0.239, 0.251, 0.253,
    ],
    [
        0.246, 0.248, 0.255, 0.265, 0.274, 0.285, 0.292, 0.284, 0.273,
        0.250, 0.225, 0.239, 0.295, 0.352, 0.320, 0.258, 0.260, 0.269,
    ],
];

/// Table for s–p transitions, see [`InterpolationTable`].
pub static SP_TABLE: InterpolationTable = InterpolationTable {
    name: "s-p",
    row_orbital: 0,
    column_orbital: 1,
    row_axis: &ROW_AXIS,
    column_axis: &COLUMN_AXIS,
    sigma: &SIGMA,
    alpha: &ALPHA,
};
