/// `POLYGON((-71.42 42.71,-17.42 42.17,-17.42 71.17,-71.42 42.71),(1 2,4 5,7 8,1 2))`
pub(crate) const XY: &str = "010300000002000000040000007B14AE47E1DA51C07B14AE47E15A4540EC51B81E856B31C0F6285C8FC2154540EC51B81E856B31C07B14AE47E1CA51407B14AE47E1DA51C07B14AE47E15A454004000000000000000000F03F0000000000000040000000000000104000000000000014400000000000001C400000000000002040000000000000F03F0000000000000040";
